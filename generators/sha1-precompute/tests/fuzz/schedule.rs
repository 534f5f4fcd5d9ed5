use bolero::check;
use sha1_precompute::constants::{BLOCK_WORDS, ZERO_INDICES};
use sha1_precompute::ScheduleUnroller;

#[test]
fn fuzz_elided_schedule_matches_recurrence() {
    let Ok(unroller) = ScheduleUnroller::preimage() else {
        panic!("built-in zero table must be valid");
    };

    check!()
        .with_type::<[u32; BLOCK_WORDS]>()
        .for_each(|block| {
            let mut block = *block;
            for &index in ZERO_INDICES.iter().filter(|&&i| i < BLOCK_WORDS) {
                block[index] = 0;
            }

            assert_eq!(unroller.first_mismatch(&block), None, "block {block:08x?}");
        });
}
