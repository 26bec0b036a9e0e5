use lazy_static::lazy_static;
use std::collections::HashMap;
use strum::{Display, EnumIter, IntoStaticStr};

/// Legal entity type of an organization, labelled the way the Swedish Tax Agency does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum OrganizationType {
    #[strum(serialize = "Dödsbon")]
    Estate,
    #[strum(serialize = "Stat, landsting, kommun eller församling")]
    Government,
    #[strum(
        serialize = "Utländska företag som bedriver näringsverksamhet eller äger fastigheter i Sverige"
    )]
    ForeignCompany,
    #[strum(serialize = "Aktiebolag")]
    LimitedCompany,
    #[strum(serialize = "Enkelt bolag")]
    SimplePartnership,
    #[strum(serialize = "Ekonomisk förening eller bostadsrättsförening")]
    EconomicAssociation,
    #[strum(serialize = "Ideella förening och stiftelse")]
    NonProfitAssociation,
    #[strum(serialize = "Handelsbolag, kommanditbolag och enkelt bolag")]
    TradingPartnership,
    /// Identified by the personal number of its owner
    #[strum(serialize = "Enskild firma")]
    SoleProprietorship,
    #[strum(serialize = "Okänt")]
    Unknown,
}

lazy_static! {
    static ref TYPES_BY_GROUP_DIGIT: HashMap<u8, OrganizationType> = HashMap::from([
        (b'1', OrganizationType::Estate),
        (b'2', OrganizationType::Government),
        (b'3', OrganizationType::ForeignCompany),
        (b'5', OrganizationType::LimitedCompany),
        (b'6', OrganizationType::SimplePartnership),
        (b'7', OrganizationType::EconomicAssociation),
        (b'8', OrganizationType::NonProfitAssociation),
        (b'9', OrganizationType::TradingPartnership),
    ]);
}

impl OrganizationType {
    /// Looks up the type from the first digit of a 10 digit organization number
    pub fn from_group_digit(digit: u8) -> Self {
        TYPES_BY_GROUP_DIGIT
            .get(&digit)
            .copied()
            .unwrap_or(OrganizationType::Unknown)
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_group_digits() {
        let test_cases = vec![
            (b'0', OrganizationType::Unknown),
            (b'1', OrganizationType::Estate),
            (b'2', OrganizationType::Government),
            (b'3', OrganizationType::ForeignCompany),
            (b'4', OrganizationType::Unknown),
            (b'5', OrganizationType::LimitedCompany),
            (b'6', OrganizationType::SimplePartnership),
            (b'7', OrganizationType::EconomicAssociation),
            (b'8', OrganizationType::NonProfitAssociation),
            (b'9', OrganizationType::TradingPartnership),
            (b'x', OrganizationType::Unknown),
        ];
        for (digit, expected) in test_cases {
            assert_eq!(OrganizationType::from_group_digit(digit), expected);
        }
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> = OrganizationType::iter().map(|t| t.label()).collect();
        let count = labels.len();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), count);
    }

    #[test]
    fn display_matches_label() {
        for organization_type in OrganizationType::iter() {
            assert_eq!(organization_type.to_string(), organization_type.label());
        }
        assert_eq!(OrganizationType::LimitedCompany.label(), "Aktiebolag");
        assert_eq!(OrganizationType::SoleProprietorship.label(), "Enskild firma");
        assert_eq!(OrganizationType::Unknown.label(), "Okänt");
    }
}
