#![no_main]

use cl_anoncreds::lattice::{pack_fes, unpack_fes, unpack_fes_loose, Q};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = unpack_fes_loose(data);

    match unpack_fes(data, Q) {
        Ok(fes) => {
            assert_eq!(data.len() % 3, 0);
            let packed = pack_fes(&fes).expect("reduced elements fit in three bytes");
            assert_eq!(unpack_fes(&packed, Q).unwrap(), fes);
        }
        Err(_) => assert_ne!(data.len() % 3, 0),
    }
});
