use bolero::check;
use sha1_precompute::{f_00_19, rotl};

#[test]
fn fuzz_rotate_involution() {
    check!().with_type::<(u32, u32)>().for_each(|&(word, bits)| {
        let n = bits % 31 + 1;
        assert_eq!(rotl(rotl(word, n), 32 - n), word, "n = {n}");
    });
}

#[test]
fn fuzz_rotate_identities() {
    check!().with_type::<(u32, u32)>().for_each(|&(word, bits)| {
        let n = bits % 32;

        assert_eq!(rotl(word, 0), word);
        assert_eq!(rotl(0, n), 0);
        assert_eq!(rotl(u32::MAX, n), u32::MAX);
        // Rotation only permutes bits.
        assert_eq!(rotl(word, n).count_ones(), word.count_ones());
        if n > 0 {
            assert_eq!(rotl(word, n), (word << n) | (word >> (32 - n)));
        }
    });
}

#[test]
fn fuzz_choice_function() {
    check!().with_type::<(u32, u32, u32)>().for_each(|&(b, c, d)| {
        // Bitwise select: c where b is set, d elsewhere.
        assert_eq!(f_00_19(b, c, d), (b & c) | (!b & d));
    });
}
