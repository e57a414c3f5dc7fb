//! End-to-end tests: encode, persist the code table, read it back, decode.

use huffman_codec::{
    CodeBook, FreqTable, HuffmanError, build_code_table, build_huffman_tree, decode, encode,
    reconstruct_tree, unpack,
};

// ── Helpers ─────────────────────────────────────────────────────────────

/// Deterministic byte noise with a skewed distribution.
fn noise(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let x = (state >> 33) as u8;
            // Fold most values into a small range so frequencies differ.
            if x & 0x80 == 0 { x & 0x0F } else { x }
        })
        .collect()
}

/// Encode, serialize the table to bytes, parse it, and decode.
fn roundtrip(input: &[u8]) -> Vec<u8> {
    let encoded = encode(input).unwrap();
    let persisted = encoded.book.to_bytes();
    let book = CodeBook::from_bytes(&persisted).unwrap();
    assert_eq!(book, encoded.book);
    decode(&book, &encoded.packed).unwrap()
}

// ── Round trips ─────────────────────────────────────────────────────────

#[test]
fn roundtrip_text() {
    let inputs: [&[u8]; 5] = [
        b"a",
        b"ab",
        b"aaab",
        b"hello, world\n",
        b"It was the best of times, it was the worst of times.\r\n\t ",
    ];
    for input in inputs {
        assert_eq!(roundtrip(input), input);
    }
}

#[test]
fn roundtrip_all_byte_values() {
    let mut input: Vec<u8> = (0..=255).collect();
    input.extend((0..=255u8).rev());
    input.extend_from_slice(b"\n\n\n   ");
    assert_eq!(roundtrip(&input), input);
}

#[test]
fn roundtrip_noise() {
    for (len, seed) in [(1, 1), (7, 2), (100, 3), (4096, 4), (65_537, 5)] {
        let input = noise(len, seed);
        assert_eq!(roundtrip(&input), input, "len {} seed {}", len, seed);
    }
}

#[test]
fn roundtrip_deep_tree() {
    // Fibonacci counts give the most lopsided tree possible.
    let mut input = Vec::new();
    let (mut a, mut b) = (1usize, 1usize);
    for symbol in 0..25u8 {
        input.extend(std::iter::repeat_n(symbol, a));
        (a, b) = (b, a + b);
    }
    let encoded = encode(&input).unwrap();
    let longest = encoded.book.codes.iter().map(|(_, c)| c.len()).max().unwrap();
    assert_eq!(longest, 24);
    assert_eq!(decode(&encoded.book, &encoded.packed).unwrap(), input);
}

// ── Properties ──────────────────────────────────────────────────────────

#[test]
fn codes_are_prefix_free() {
    for seed in 0..8 {
        let encoded = encode(&noise(2000, seed)).unwrap();
        assert!(encoded.book.codes.is_prefix_free(), "seed {}", seed);
    }
}

#[test]
fn identical_frequencies_give_identical_tables() {
    let first = encode(b"mississippi").unwrap();
    let second = encode(b"mississippi").unwrap();
    assert_eq!(first.book.to_bytes(), second.book.to_bytes());

    // Same multiset, different order.
    let permuted = encode(b"ssssiiiippm").unwrap();
    assert_eq!(first.book.to_bytes(), permuted.book.to_bytes());
}

#[test]
fn single_symbol_uses_count_not_bits() {
    let encoded = encode(b"aaaaa").unwrap();
    assert_eq!(encoded.book.to_bytes(), b"5\na \n".to_vec());
    assert!(encoded.packed.is_empty());
    assert_eq!(roundtrip(b"aaaaa"), b"aaaaa");
}

#[test]
fn padding_is_never_decoded() {
    // Codewords b=0, c=10, a=11: 13 bits packed, 3 bits of padding.
    let input = b"abcabcab";
    let encoded = encode(input).unwrap();
    let bits: usize = input
        .iter()
        .map(|&s| encoded.book.codes.get(s).unwrap().len())
        .sum();
    assert_ne!(bits % 8, 0);
    assert_eq!(encoded.packed.len(), bits.div_ceil(8));

    let last = *encoded.packed.last().unwrap();
    let pad = 8 - bits % 8;
    assert_eq!(last & ((1u8 << pad) - 1), 0);

    assert_eq!(decode(&encoded.book, &encoded.packed).unwrap(), input);
}

#[test]
fn reconstructed_tree_decodes_like_built_tree() {
    let input = noise(3000, 42);
    let frequencies = FreqTable::from_bytes(&input);
    let built = build_huffman_tree(&frequencies).unwrap();
    let codes = build_code_table(&built);
    let encoded = encode(&input).unwrap();

    let rebuilt = reconstruct_tree(&codes).unwrap();
    let count = frequencies.total();
    let via_built = unpack(&built, count, &encoded.packed).unwrap();
    let via_rebuilt = unpack(&rebuilt, count, &encoded.packed).unwrap();
    assert_eq!(via_built, via_rebuilt);
    assert_eq!(via_built, input);
}

// ── Errors ──────────────────────────────────────────────────────────────

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(encode(b""), Err(HuffmanError::NoSymbols)));
}

#[test]
fn corrupt_table_is_rejected() {
    let encoded = encode(b"abcabcab").unwrap();
    let mut bytes = encoded.book.to_bytes();
    // Zeroing every codeword leaves b=0 as a prefix of a=00 and c=00.
    for b in bytes.iter_mut().skip(2) {
        if *b == b'1' {
            *b = b'0';
        }
    }
    let book = CodeBook::from_bytes(&bytes).unwrap();
    assert!(matches!(
        decode(&book, &encoded.packed),
        Err(HuffmanError::MalformedCodeTable(_))
    ));
}

#[test]
fn short_stream_is_truncated() {
    let input = noise(500, 9);
    let encoded = encode(&input).unwrap();
    let cut = &encoded.packed[..encoded.packed.len() / 2];
    assert!(matches!(
        decode(&encoded.book, cut),
        Err(HuffmanError::TruncatedStream { .. })
    ));
}
