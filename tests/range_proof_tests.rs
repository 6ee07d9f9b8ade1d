mod common;

use cl_anoncreds::keyproof::{RANGE_PROOF_EPSILON, RANGE_PROOF_ITERS};
use cl_anoncreds::primitives::rng::random_bits;
use cl_anoncreds::zkproof::SecretMerge;
use cl_anoncreds::{
    hash_commit, Error, RangeProofBundle, RangeProver, RangeVerifier, Secret, SecureRng,
    TracingFollower,
};
use num_bigint::BigInt;
use num_traits::One;

use common::{init_tracing, pedersen_range};

const L1: u32 = 32;
const L2: u32 = 64;

fn prove(x: &BigInt, r: &BigInt, rng: &mut SecureRng) -> (common::PedersenRange, RangeProofBundle) {
    let setup = pedersen_range(x, r, L1, L2, rng);
    let sx = Secret::with_randomizer("x", x.clone(), BigInt::one());
    let sr = Secret::with_randomizer("r", r.clone(), BigInt::one());
    let bundle = RangeProver::new(&setup.structure, &setup.group, &setup.bases)
        .prove(
            &SecretMerge::new(vec![&sx, &sr]),
            &BigInt::from(10u32),
            &BigInt::from(20u32),
            rng,
        )
        .expect("Range proof generation should succeed");
    (setup, bundle)
}

#[test]
fn in_range_values_always_verify() {
    init_tracing();
    let mut rng = SecureRng::new();
    let max = (BigInt::one() << L1) - 1u32;
    for x in [BigInt::from(0u32), BigInt::from(1u32), random_bits(&mut rng, L1), max] {
        let r = random_bits(&mut rng, 128);
        let (setup, bundle) = prove(&x, &r, &mut rng);

        assert!(setup.structure.verify_proof_structure(&bundle.proof));
        let verifier = RangeVerifier::new(&setup.structure, &setup.group, &setup.bases);
        assert!(
            verifier
                .verify(&bundle, &BigInt::from(10u32), &BigInt::from(20u32))
                .is_ok(),
            "In-range value should verify"
        );
    }
}

#[test]
fn far_out_of_range_values_fail_structure() {
    init_tracing();
    let mut rng = SecureRng::new();
    let too_big = BigInt::one() << (L2 + RANGE_PROOF_EPSILON + 3);
    let too_small = -(BigInt::one() << (L2 + RANGE_PROOF_EPSILON + 3));

    for x in [too_big, too_small] {
        let r = random_bits(&mut rng, 128);
        let (setup, bundle) = prove(&x, &r, &mut rng);

        // every round with challenge bit one leaves the window
        assert!(!setup.structure.verify_proof_structure(&bundle.proof));
        let verifier = RangeVerifier::new(&setup.structure, &setup.group, &setup.bases);
        assert!(matches!(
            verifier.verify(&bundle, &BigInt::from(10u32), &BigInt::from(20u32)),
            Err(Error::MalformedProof(_))
        ));
    }
}

#[test]
fn values_inside_slack_window_always_verify() {
    init_tracing();
    let mut rng = SecureRng::new();
    let slack = L2 + RANGE_PROOF_EPSILON;
    // 2^l1 itself, and the largest value whose bit-one responses can never go negative
    let edges = [
        BigInt::one() << L1,
        (BigInt::one() << L1) + (BigInt::one() << slack),
    ];

    for x in edges {
        for _ in 0..3 {
            let r = random_bits(&mut rng, 128);
            let (setup, bundle) = prove(&x, &r, &mut rng);
            assert!(setup.structure.verify_proof_structure(&bundle.proof));
            let verifier = RangeVerifier::new(&setup.structure, &setup.group, &setup.bases);
            assert!(
                verifier
                    .verify(&bundle, &BigInt::from(10u32), &BigInt::from(20u32))
                    .is_ok(),
                "Values within 2^(l2+ε) of 2^l1 are accepted by the construction alone"
            );
        }
    }
}

#[test]
fn values_just_past_slack_window_are_rejected() {
    init_tracing();
    let mut rng = SecureRng::new();
    let edge = (BigInt::one() << (L2 + RANGE_PROOF_EPSILON + 1)) + 1u32;

    // each bit-one round escapes with probability about 1/2
    for x in [edge.clone(), -edge] {
        for _ in 0..3 {
            let r = random_bits(&mut rng, 128);
            let (setup, bundle) = prove(&x, &r, &mut rng);
            assert!(!setup.structure.verify_proof_structure(&bundle.proof));
            let verifier = RangeVerifier::new(&setup.structure, &setup.group, &setup.bases);
            assert!(matches!(
                verifier.verify(&bundle, &BigInt::from(10u32), &BigInt::from(20u32)),
                Err(Error::MalformedProof(_))
            ));
        }
    }
}

#[test]
fn fake_proof_is_well_formed_but_not_valid() {
    init_tracing();
    let mut rng = SecureRng::new();
    let x = BigInt::from(17u32);
    let r = random_bits(&mut rng, 128);
    let setup = pedersen_range(&x, &r, L1, L2, &mut rng);

    let proof = setup.structure.fake_proof(&setup.group, &mut rng).unwrap();
    assert!(setup.structure.verify_proof_structure(&proof));
    assert_eq!(proof.results["x"].len(), RANGE_PROOF_ITERS);

    let bundle = RangeProofBundle {
        challenge: random_bits(&mut rng, 256),
        proof,
    };
    let verifier = RangeVerifier::new(&setup.structure, &setup.group, &setup.bases);
    assert!(matches!(
        verifier.verify(&bundle, &BigInt::from(10u32), &BigInt::from(20u32)),
        Err(Error::ProofVerificationFailed)
    ));
}

#[test]
fn verification_is_deterministic() {
    init_tracing();
    let mut rng = SecureRng::new();
    let x = BigInt::from(4096u32);
    let r = random_bits(&mut rng, 128);
    let (setup, bundle) = prove(&x, &r, &mut rng);

    let rebuild = || {
        let lhs = setup
            .structure
            .base()
            .lhs_value(&setup.group, &setup.bases)
            .unwrap();
        let mut list = vec![BigInt::from(10u32), lhs];
        setup
            .structure
            .commitments_from_proof(
                &setup.group,
                &mut list,
                &bundle.challenge,
                &setup.bases,
                &bundle.proof,
                None,
            )
            .unwrap();
        list.push(BigInt::from(20u32));
        hash_commit(&list)
    };

    let first = rebuild();
    assert_eq!(first, rebuild());
    assert_eq!(first, bundle.challenge);
}

#[test]
fn follower_observes_prover_and_verifier() {
    init_tracing();
    let mut rng = SecureRng::new();
    let x = BigInt::from(99u32);
    let r = random_bits(&mut rng, 128);
    let setup = pedersen_range(&x, &r, L1, L2, &mut rng);
    let sx = Secret::with_randomizer("x", x, BigInt::one());
    let sr = Secret::with_randomizer("r", r, BigInt::one());
    let follower = TracingFollower::new("range-proof");

    let context = BigInt::from(1u32);
    let nonce = BigInt::from(2u32);
    let bundle = RangeProver::new(&setup.structure, &setup.group, &setup.bases)
        .with_follower(&follower)
        .prove(&SecretMerge::new(vec![&sx, &sr]), &context, &nonce, &mut rng)
        .unwrap();
    RangeVerifier::new(&setup.structure, &setup.group, &setup.bases)
        .with_follower(&follower)
        .verify(&bundle, &context, &nonce)
        .unwrap();

    assert_eq!(follower.ticks(), 2);
}

#[test]
fn bundle_survives_json_transport() {
    let mut rng = SecureRng::new();
    let x = BigInt::from(12u32);
    let r = random_bits(&mut rng, 128);
    let (setup, bundle) = prove(&x, &r, &mut rng);

    let json = serde_json::to_string(&bundle).unwrap();
    assert!(json.contains("\"Results\""));
    let decoded: RangeProofBundle = serde_json::from_str(&json).unwrap();

    RangeVerifier::new(&setup.structure, &setup.group, &setup.bases)
        .verify(&decoded, &BigInt::from(10u32), &BigInt::from(20u32))
        .unwrap();
}
