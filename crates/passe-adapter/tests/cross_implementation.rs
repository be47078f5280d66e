//! Cross-implementation checks: hashes from one adapter must verify with the
//! other adapter of the same scheme, with identical outcomes.

use passe_adapter::argon2::{Argon2Adapter, Argon2Variant, PhcHash, RawArgon2Adapter, VERSION_10};
use passe_adapter::bcrypt::{BcryptAdapter, RawBcryptAdapter};
use passe_adapter::{
    AdapterError, Argon2Parameters, BcryptParameters, EncodedHash, HashAdapter, HashRequest,
    VerificationOutcome,
};
use proptest::prelude::*;

const CHEAP_BCRYPT: BcryptParameters = BcryptParameters { cost: 4 };
const CHEAP_ARGON2: Argon2Parameters = Argon2Parameters {
    time_cost: 1,
    memory_cost_kib: 64,
    parallelism: 1,
};

/// Hash with `producer`, then check both adapters reach the same verdicts.
fn exchange<P, A, B>(producer: &A, consumer: &B, password: &[u8], wrong: &[u8], params: &P)
where
    P: passe_adapter::SchemeParams,
    A: HashAdapter<Params = P>,
    B: HashAdapter<Params = P>,
{
    let encoded = producer.hash(password, params).unwrap();
    assert_eq!(producer.verify(password, &encoded), VerificationOutcome::Match);
    assert_eq!(
        consumer.verify(password, &encoded),
        VerificationOutcome::Match,
        "{} rejected a hash from {}: {encoded}",
        B::IMPLEMENTATION,
        A::IMPLEMENTATION
    );
    assert_eq!(consumer.verify(wrong, &encoded), producer.verify(wrong, &encoded));
}

#[test]
fn test_bcrypt_library_to_raw() {
    exchange(&BcryptAdapter, &RawBcryptAdapter, b"hunter2", b"wrong", &CHEAP_BCRYPT);
}

#[test]
fn test_bcrypt_raw_to_library() {
    exchange(&RawBcryptAdapter, &BcryptAdapter, b"hunter2", b"wrong", &CHEAP_BCRYPT);
}

#[test]
fn test_argon2_library_to_raw() {
    exchange(&Argon2Adapter, &RawArgon2Adapter, b"hunter2", b"wrong", &CHEAP_ARGON2);
}

#[test]
fn test_argon2_raw_to_library() {
    exchange(&RawArgon2Adapter, &Argon2Adapter, b"hunter2", b"wrong", &CHEAP_ARGON2);
}

#[test]
fn test_hash_request_round_trip() {
    let request = HashRequest::new("secret", BcryptParameters::default());
    let encoded = request.hash_with(&RawBcryptAdapter).unwrap();
    // Default bcrypt cost is 4
    assert!(encoded.as_str().starts_with("$2b$04$"));
    assert!(BcryptAdapter.verify(request.password().as_bytes(), &encoded).is_match());
}

#[test]
fn test_malformed_hash_is_error_everywhere() {
    let encoded = EncodedHash::from("not-a-valid-hash");
    let outcomes = [
        BcryptAdapter.verify(b"pw", &encoded),
        RawBcryptAdapter.verify(b"pw", &encoded),
        Argon2Adapter.verify(b"pw", &encoded),
        RawArgon2Adapter.verify(b"pw", &encoded),
    ];
    for outcome in outcomes {
        assert!(
            matches!(outcome, VerificationOutcome::Error(AdapterError::MalformedHash(_))),
            "expected malformed, got {outcome:?}"
        );
    }
}

#[test]
fn test_non_canonical_bcrypt_is_error_in_both_adapters() {
    // Each is a variation on a valid `$2b$04$` hash of "hunter2"
    let cases = [
        "$2b$4$..CA.uOD/eaGAOmJB.yMBurkTM.teJW4P/NXJXOT49X8IHvXALk4i",
        "$2b$004$..CA.uOD/eaGAOmJB.yMBurkTM.teJW4P/NXJXOT49X8IHvXALk4i",
        "$2b$03$..CA.uOD/eaGAOmJB.yMBurkTM.teJW4P/NXJXOT49X8IHvXALk4i",
        "$2b$04$..CA.uOD/eaGAOmJB.yMBurkTM.teJW4P/NXJXOT49X8IHvXALk4iXX",
        "$2$04$..CA.uOD/eaGAOmJB.yMBurkTM.teJW4P/NXJXOT49X8IHvXALk4i",
    ];
    for case in cases {
        let encoded = EncodedHash::from(case);
        let library = BcryptAdapter.verify(b"hunter2", &encoded);
        let raw = RawBcryptAdapter.verify(b"hunter2", &encoded);
        for outcome in [&library, &raw] {
            assert!(
                matches!(outcome, VerificationOutcome::Error(AdapterError::MalformedHash(_))),
                "{case}: expected malformed, got {outcome:?}"
            );
        }
    }
}

#[test]
fn test_unversioned_argon2_hash_agrees_as_v10() {
    let salt = [0x33u8; 16];
    let mut digest = [0u8; 32];
    let params = argon2::Params::new(64, 1, 1, Some(32)).unwrap();
    argon2::Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x10, params)
        .hash_password_into(b"hunter2", &salt, &mut digest)
        .unwrap();
    let phc = PhcHash {
        variant: Argon2Variant::Id,
        version: VERSION_10,
        memory_cost_kib: 64,
        time_cost: 1,
        parallelism: 1,
        salt: salt.to_vec(),
        hash: digest.to_vec(),
    };

    // libargon2 omits `v=` for version 0x10 and reads its absence the same way
    let unversioned = EncodedHash::new(phc.to_string().replace("$v=16", ""));
    let versioned = EncodedHash::new(phc.to_string());
    for encoded in [&unversioned, &versioned] {
        assert_eq!(RawArgon2Adapter.verify(b"hunter2", encoded), VerificationOutcome::Match);
        assert_eq!(Argon2Adapter.verify(b"hunter2", encoded), VerificationOutcome::Match);
        assert_eq!(
            RawArgon2Adapter.verify(b"hunter3", encoded),
            Argon2Adapter.verify(b"hunter3", encoded)
        );
    }
}

#[test]
fn test_same_salt_same_encoding() {
    let salt = [0x5a; 16];
    assert_eq!(
        BcryptAdapter.hash_with_salt(b"hunter2", &CHEAP_BCRYPT, &salt).unwrap(),
        RawBcryptAdapter.hash_with_salt(b"hunter2", &CHEAP_BCRYPT, &salt).unwrap()
    );
    assert_eq!(
        Argon2Adapter.hash_with_salt(b"hunter2", &CHEAP_ARGON2, &salt).unwrap(),
        RawArgon2Adapter.hash_with_salt(b"hunter2", &CHEAP_ARGON2, &salt).unwrap()
    );
}

#[test]
fn test_rejections_agree() {
    let too_long = [b'a'; 73];
    assert!(BcryptAdapter.hash(&too_long, &CHEAP_BCRYPT).is_err());
    assert!(RawBcryptAdapter.hash(&too_long, &CHEAP_BCRYPT).is_err());

    let bad_cost = BcryptParameters { cost: 32 };
    assert!(BcryptAdapter.hash(b"pw", &bad_cost).is_err());
    assert!(RawBcryptAdapter.hash(b"pw", &bad_cost).is_err());

    let no_lanes = Argon2Parameters {
        parallelism: 0,
        ..CHEAP_ARGON2
    };
    assert!(Argon2Adapter.hash(b"pw", &no_lanes).is_err());
    assert!(RawArgon2Adapter.hash(b"pw", &no_lanes).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_bcrypt_round_trips_across_adapters(
        password in proptest::collection::vec(1u8..=255, 0..=72),
        salt in any::<[u8; 16]>(),
    ) {
        let a = BcryptAdapter.hash_with_salt(&password, &CHEAP_BCRYPT, &salt).unwrap();
        let b = RawBcryptAdapter.hash_with_salt(&password, &CHEAP_BCRYPT, &salt).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert!(RawBcryptAdapter.verify(&password, &a).is_match());
        prop_assert!(BcryptAdapter.verify(&password, &b).is_match());
    }

    #[test]
    fn prop_argon2_round_trips_across_adapters(
        password in proptest::collection::vec(any::<u8>(), 0..=64),
        salt in any::<[u8; 16]>(),
    ) {
        let a = Argon2Adapter.hash_with_salt(&password, &CHEAP_ARGON2, &salt).unwrap();
        let b = RawArgon2Adapter.hash_with_salt(&password, &CHEAP_ARGON2, &salt).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert!(RawArgon2Adapter.verify(&password, &a).is_match());
        prop_assert!(Argon2Adapter.verify(&password, &b).is_match());
    }
}
