#![no_main]

use std::sync::OnceLock;

use cl_anoncreds::{
    BaseMap, Group, LhsContribution, RangeProof, RangeProofStructure,
    RepresentationProofStructure, RhsContribution,
};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

fn structure() -> &'static (Group, BaseMap, RangeProofStructure) {
    static SETUP: OnceLock<(Group, BaseMap, RangeProofStructure)> = OnceLock::new();
    SETUP.get_or_init(|| {
        let group = Group::from_safe_prime(BigInt::from(2039u32)).unwrap();
        let bases = BaseMap::new()
            .with("g", BigInt::from(4u32))
            .with("h", BigInt::from(9u32))
            .with("C", BigInt::from(16u32));
        let base = RepresentationProofStructure::new(
            vec![LhsContribution {
                base: "C".to_string(),
                power: BigInt::from(1u32),
            }],
            vec![
                RhsContribution {
                    base: "g".to_string(),
                    secret: "x".to_string(),
                    power: 1,
                },
                RhsContribution {
                    base: "h".to_string(),
                    secret: "r".to_string(),
                    power: 1,
                },
            ],
        );
        let structure = RangeProofStructure::new(base, "x", 8, 16).unwrap();
        (group, bases, structure)
    })
}

fuzz_target!(|data: &[u8]| {
    let Ok(proof) = serde_json::from_slice::<RangeProof>(data) else {
        return;
    };
    let (group, bases, structure) = structure();
    let well_formed = structure.verify_proof_structure(&proof);
    let mut list = Vec::new();
    let result =
        structure.commitments_from_proof(group, &mut list, &BigInt::from(5u32), bases, &proof, None);
    assert_eq!(well_formed, result.is_ok());
});
