//! Schedule Unrolling Tests
//!
//! Term selection and ordering per index, the degenerate zero case, the
//! auxiliary fragments, and agreement with the full recurrence.

#![allow(clippy::unwrap_used)]

use sha1_precompute::constants::{SCHEDULE_OFFSETS, ZERO_INDICES};
use sha1_precompute::{
    reference_schedule, Buffer, Expr, IndexPartition, Naming, Operand, ScheduleUnroller,
};

fn preimage() -> ScheduleUnroller {
    ScheduleUnroller::preimage().unwrap()
}

/// Partition where only 14 and 16 of the first few sources are zero.
fn sparse() -> ScheduleUnroller {
    ScheduleUnroller::new(IndexPartition::from_zero(&[0, 2, 8, 13, 14, 16]).unwrap())
}

// =============================================================================
// TERM SELECTION
// =============================================================================

#[test]
fn test_every_index_keeps_exactly_its_live_sources() {
    let unroller = preimage();
    let expressions = unroller.expressions();

    assert_eq!(expressions.len(), 63);
    for (expression, index) in expressions.iter().zip(17..80) {
        assert_eq!(expression.index, index);

        let expected: Vec<usize> = SCHEDULE_OFFSETS
            .iter()
            .map(|offset| index - offset)
            .filter(|source| !ZERO_INDICES.contains(source))
            .collect();
        assert_eq!(expression.sources, expected, "index {index}");
        assert_eq!(expression.is_zero(), expected.is_empty());
    }
}

#[test]
fn test_index_17_drops_source_14() {
    let expression = sparse().expression(17).unwrap();
    assert_eq!(expression.sources, [9, 3, 1]);

    let naming = Naming::default();
    let lines: Vec<String> = expression.statements().iter().map(|s| s.render(&naming)).collect();
    assert_eq!(
        lines,
        [
            "p_precomputedBlocks[17] = p_precomputedBlocks[9] ^ p_precomputedBlocks[3] ^ p_precomputedBlocks[1];",
            "p_precomputedBlocks[17] = LEFT_ROTATE(p_precomputedBlocks[17], 1);",
        ]
    );
}

#[test]
fn test_index_19_drops_source_16() {
    assert_eq!(sparse().expression(19).unwrap().sources, [11, 5, 3]);
}

#[test]
fn test_preimage_table_scenarios() {
    let unroller = preimage();

    assert_eq!(unroller.expression(17).unwrap().sources, [1]);
    assert_eq!(unroller.expression(18).unwrap().sources, [15]);
    assert!(unroller.expression(19).unwrap().is_zero());
    assert_eq!(unroller.expression(23).unwrap().sources, [20, 15]);
    assert_eq!(unroller.expression(79).unwrap().sources, [76, 71, 65, 63]);
}

// =============================================================================
// DEGENERATE CASE
// =============================================================================

#[test]
fn test_zero_index_emits_single_statement_without_rotate() {
    let expression = preimage().expression(19).unwrap();
    let statements = expression.statements();

    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].value, Expr::Zero);
    assert_eq!(
        statements[0].render(&Naming::default()),
        "p_precomputedBlocks[19] = 0;"
    );
}

#[test]
fn test_live_index_rotates_in_place() {
    let statements = preimage().expression(40).unwrap().statements();
    let target = Operand::new(Buffer::Precomputed, 40);

    assert_eq!(statements.len(), 2);
    assert_eq!(statements[1].target, target);
    assert_eq!(statements[1].value, Expr::Rotate { operand: target, bits: 1 });
}

// =============================================================================
// AUXILIARY FRAGMENTS
// =============================================================================

#[test]
fn test_auxiliary_fragments() {
    let schedule = preimage().unroll();
    let naming = Naming::default();

    let priming = &schedule.priming.statements;
    assert_eq!(priming.len(), 20);
    assert_eq!(priming[0].render(&naming), "p_w0[1] = LEFT_ROTATE(p_blocks[0], 1);");
    assert_eq!(priming[19].render(&naming), "p_w0[20] = LEFT_ROTATE(p_blocks[0], 20);");

    let copy = &schedule.copy_forward.statements;
    assert_eq!(copy.len(), 60);
    assert_eq!(copy[0].render(&naming), "p_blocks[16] = p_precomputedBlocks[16];");
    assert_eq!(copy[59].render(&naming), "p_blocks[75] = p_precomputedBlocks[75];");

    let broadcast = &schedule.broadcast.statements;
    assert_eq!(broadcast.len(), 63);
    assert_eq!(
        broadcast[62].render(&naming),
        "p_precomputedBlocks[79] = SET1INT(p_tempPrecomputedBlocks[79]);"
    );
}

#[test]
fn test_fragment_order() {
    let schedule = preimage().unroll();
    let names: Vec<&str> = schedule.fragments().iter().map(|f| f.name).collect();
    assert_eq!(names, ["expansion", "priming", "copy-forward", "broadcast"]);
}

// =============================================================================
// SOUNDNESS
// =============================================================================

#[test]
fn test_generated_schedule_matches_reference() {
    for unroller in [preimage(), sparse()] {
        for seed in 0..256 {
            let block = unroller.sample_block(seed);
            assert_eq!(unroller.first_mismatch(&block), None, "seed {seed}");
            assert_eq!(unroller.evaluate(&block), reference_schedule(&block));
        }
    }
}

#[test]
fn test_nonzero_word_breaks_elision() {
    // Word 3 is assumed zero; setting it must show up as a mismatch.
    let unroller = preimage();
    let mut block = unroller.sample_block(1);
    block[3] = 1;
    assert_eq!(unroller.first_mismatch(&block), Some(17));
}

#[test]
fn test_corrupted_statement_is_reported() {
    let unroller = preimage();
    let mut schedule = unroller.unroll();
    let mut block = unroller.sample_block(3);
    block[1] = 1;
    assert_eq!(schedule.first_mismatch(&block), None);

    // Statement 1 is the in-place rotate of W[17].
    let target = Operand::new(Buffer::Precomputed, 17);
    schedule.expansion.statements[1].value = Expr::Rotate { operand: target, bits: 2 };
    assert_eq!(
        schedule.expansion.statements[1].render(&Naming::default()),
        "p_precomputedBlocks[17] = LEFT_ROTATE(p_precomputedBlocks[17], 2);"
    );
    assert_eq!(schedule.first_mismatch(&block), Some(17));
}

#[test]
fn test_dropped_live_source_is_reported() {
    let unroller = preimage();
    let mut schedule = unroller.unroll();
    let mut block = unroller.sample_block(5);
    block[15] = 1;

    // W[23] = W[20] ^ W[15]; emit only W[20].
    let position = schedule
        .expansion
        .statements
        .iter()
        .position(|s| s.target.index == 23)
        .unwrap();
    schedule.expansion.statements[position].value =
        Expr::xor(vec![Operand::new(Buffer::Precomputed, 20)]);
    assert_eq!(schedule.first_mismatch(&block), Some(23));
}
