// Property tests for the checked codecs through the public API

use latticesig_algorithms::poly::prelude::*;
use latticesig_algorithms::Error;
use latticesig_params::ParameterSet;
use proptest::prelude::*;

fn preset() -> impl Strategy<Value = ParameterSet> {
    prop::sample::select(ParameterSet::PRESETS.to_vec())
}

fn field(params: ParameterSet) -> impl Strategy<Value = Field> {
    prop::sample::select(vec![
        Field::Eta(params.eta),
        Field::T1,
        Field::T0,
        Field::Z(params.gamma1),
        Field::W1(params.gamma2),
    ])
}

fn poly_in(field: Field) -> impl Strategy<Value = Polynomial> {
    let (lo, hi) = field.coeff_range();
    prop::collection::vec(lo..=hi, 256).prop_map(|v| Polynomial::from_coeffs(&v).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn checked_round_trip(
        (f, a) in preset().prop_flat_map(field).prop_flat_map(|f| (Just(f), poly_in(f)))
    ) {
        let mut bytes = vec![0u8; f.packed_bytes()];
        f.try_pack(&mut bytes, &a).unwrap();
        prop_assert_eq!(f.try_unpack(&bytes).unwrap(), a);
    }

    #[test]
    fn decoded_bytes_always_repack_identically(
        params in preset(),
        bytes in prop::collection::vec(any::<u8>(), 640),
    ) {
        // t0 and z have no invalid encodings, so any bytes decode and repack
        let t0 = &bytes[..416];
        let a = Field::T0.try_unpack(t0).unwrap();
        let mut again = vec![0u8; 416];
        Field::T0.pack(&mut again, &a);
        prop_assert_eq!(&again[..], t0);

        let z = Field::Z(params.gamma1);
        let zb = &bytes[..z.packed_bytes()];
        let a = z.try_unpack(zb).unwrap();
        let mut again = vec![0u8; zb.len()];
        z.pack(&mut again, &a);
        prop_assert_eq!(&again[..], zb);
    }

    #[test]
    fn wrong_lengths_are_rejected(params in preset(), delta in 1usize..8, longer in any::<bool>()) {
        let f = Field::Z(params.gamma1);
        let len = if longer { f.packed_bytes() + delta } else { f.packed_bytes() - delta };
        let is_length_error = matches!(f.try_unpack(&vec![0u8; len]), Err(Error::Length { .. }));
        prop_assert!(is_length_error);
    }
}
