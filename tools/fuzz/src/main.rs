use afl::fuzz;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sds_swedish_ids::{FixedClock, FormatLength, OrganizationNumber, ParseOptions, PersonalNumber};

const CURRENT_YEAR: i32 = 2024;

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b',')?;
    Some((&input[0..i], &input[i + 1..]))
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_options(rng: &mut StdRng) -> ParseOptions {
    ParseOptions::new()
        .allow_interim_number(rng.gen_bool(0.5))
        .disable_coordination_number(rng.gen_bool(0.5))
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let options = gen_options(&mut rng);
    let clock = FixedClock::from_ymd(CURRENT_YEAR, 6, 1).unwrap();

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Options: {:?}", options);
    }

    if let Ok(personal_number) = PersonalNumber::parse_with_clock(input, &options, &clock) {
        #[cfg(feature = "manual_test")]
        println!("Personal number: {:?}", personal_number);

        let long = personal_number.format(FormatLength::Long);
        assert_eq!(
            PersonalNumber::parse_with_clock(&long, &options, &clock).as_ref(),
            Ok(&personal_number)
        );
        // The short format only covers the two centuries before the current year
        let years_ago = CURRENT_YEAR - i32::from(personal_number.full_year());
        if (0..200).contains(&years_ago) {
            let short = personal_number.format(FormatLength::Short);
            assert_eq!(
                PersonalNumber::parse_with_clock(&short, &options, &clock).as_ref(),
                Ok(&personal_number)
            );
        }
        assert_eq!(
            personal_number.is_coordination_number(),
            personal_number.day() > 60
        );
        assert_ne!(personal_number.is_male(), personal_number.is_female());
    }

    if let Ok(organization_number) = OrganizationNumber::parse_with_clock(input, &clock) {
        #[cfg(feature = "manual_test")]
        println!("Organization number: {:?}", organization_number);

        let short = organization_number.format(false);
        let long = organization_number.format(true);
        assert_eq!(short.len(), 10);
        assert_eq!(long.len(), 11);
        assert_eq!(organization_number.vat_number().len(), 14);
        assert!(OrganizationNumber::parse_with_clock(&long, &clock).is_ok());
    }
}
