// tests/integration_tests.rs
//! Integration tests for the native primitives

use nativebuf::prelude::*;
use nativebuf::{baseline, native};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Two buffers that are independent, identical, or equal-length over a tiny
/// alphabet, so equal and unequal outcomes both show up often.
fn buffer_pair_strategy() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    prop_oneof![
        (any::<Vec<u8>>(), any::<Vec<u8>>()),
        any::<Vec<u8>>().prop_map(|v| (v.clone(), v)),
        (0usize..64).prop_flat_map(|len| {
            (
                prop::collection::vec(0u8..2, len),
                prop::collection::vec(0u8..2, len),
            )
        }),
    ]
}

/// Buffer plus a source range and destination offset that stay in bounds.
fn overlap_strategy() -> impl Strategy<Value = (Vec<u8>, usize, usize, usize)> {
    prop::collection::vec(any::<u8>(), 1..512).prop_flat_map(|buf| {
        let len = buf.len();
        (Just(buf), 0..=len, 0..=len, 0..=len).prop_map(|(buf, a, b, dest)| {
            (buf, a.min(b), a.max(b), dest)
        })
    })
}

// =============================================================================
// EQUALITY
// =============================================================================

proptest! {
    #[test]
    fn prop_equal_symmetric((a, b) in buffer_pair_strategy()) {
        prop_assert_eq!(equal(&a, &b), equal(&b, &a));
        prop_assert_eq!(ordinal_equal(&a, &b), ordinal_equal(&b, &a));
    }

    #[test]
    fn prop_equal_reflexive(a in any::<Vec<u8>>()) {
        prop_assert!(equal(&a, &a));
        prop_assert!(equal(&a, &a.clone()));
        prop_assert!(ordinal_equal(&a, &a));
    }

    #[test]
    fn prop_equal_matches_slice_eq((a, b) in buffer_pair_strategy()) {
        prop_assert_eq!(equal(&a, &b), a == b);
        prop_assert_eq!(equal(&a, &b), baseline::equal(&a, &b));
    }

    #[test]
    fn prop_unequal_lengths_never_equal(
        a in any::<Vec<u8>>(),
        b in any::<Vec<u8>>(),
    ) {
        prop_assume!(a.len() != b.len());
        prop_assert!(!equal(&a, &b));
        prop_assert!(!ordinal_equal(&a, &b));
    }

    #[test]
    fn prop_shared_prefix_with_extra_byte_is_unequal(
        a in any::<Vec<u8>>(),
        extra in any::<u8>(),
    ) {
        let mut longer = a.clone();
        longer.push(extra);
        prop_assert!(!equal(&a, &longer));
        prop_assert!(!equal(&longer, &a));
    }

    #[test]
    fn prop_ordinal_agrees_without_terminator(
        (a, b) in buffer_pair_strategy()
            .prop_map(|(a, b)| {
                let strip = |v: Vec<u8>| v.into_iter().map(|x| x | 0x80).collect::<Vec<u8>>();
                (strip(a), strip(b))
            })
    ) {
        prop_assert_eq!(ordinal_equal(&a, &b), equal(&a, &b));
    }
}

// =============================================================================
// SEARCH
// =============================================================================

proptest! {
    #[test]
    fn prop_find_byte_is_first_position(
        buffer in prop::collection::vec(any::<u8>(), 0..2048),
        target in any::<u8>(),
    ) {
        let expected = buffer.iter().position(|&b| b == target);
        prop_assert_eq!(find_byte(&buffer, target), expected);
        prop_assert_eq!(baseline::find_byte(&buffer, target), expected);
    }

    #[test]
    fn prop_find_byte_locates_planted_byte(
        filler in prop::collection::vec(0u8..0x80, 0..2048),
        target in 0x80u8..=0xFF,
        index in any::<prop::sample::Index>(),
    ) {
        prop_assert_eq!(find_byte(&filler, target), None);

        let mut buffer = filler.clone();
        let at = index.index(buffer.len() + 1);
        buffer.insert(at, target);
        prop_assert_eq!(find_byte(&buffer, target), Some(at));
    }

    #[test]
    fn prop_find_byte_empty(target in any::<u8>()) {
        prop_assert_eq!(find_byte(&[], target), None);
    }
}

#[test]
fn test_find_byte_on_subslice() {
    let data = b"xxaxxbxx";
    // Offsets are relative to the slice passed in, not the parent buffer.
    assert_eq!(find_byte(&data[3..], b'b'), Some(2));
    assert_eq!(find_byte(&data[3..], b'a'), None);
}

// =============================================================================
// COPY
// =============================================================================

proptest! {
    #[test]
    fn prop_copy_prefix_contract(
        source in prop::collection::vec(any::<u8>(), 0..1024),
        dest_len in 0usize..1024,
    ) {
        let mut dest = vec![0xEEu8; dest_len];
        let copied = copy(&mut dest, &source);

        prop_assert_eq!(copied, dest_len.min(source.len()));
        prop_assert_eq!(&dest[..copied], &source[..copied]);
        prop_assert!(dest[copied..].iter().all(|&b| b == 0xEE));
    }

    #[test]
    fn prop_copy_matches_baseline(
        source in prop::collection::vec(any::<u8>(), 0..256),
        dest_len in 0usize..256,
    ) {
        let mut ours = vec![0u8; dest_len];
        let mut theirs = vec![0u8; dest_len];
        prop_assert_eq!(copy(&mut ours, &source), baseline::copy(&mut theirs, &source));
        prop_assert_eq!(ours, theirs);
    }

    #[test]
    fn prop_copy_within_overlap((buf, start, end, dest) in overlap_strategy()) {
        let original = buf.clone();
        let mut ours = buf;
        let copied = copy_within(&mut ours, start..end, dest).unwrap();

        let count = (end - start).min(original.len() - dest);
        let mut expected = original.clone();
        expected.copy_within(start..start + count, dest);

        prop_assert_eq!(copied, count);
        prop_assert_eq!(&ours[dest..dest + copied], &original[start..start + copied]);
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn prop_raw_memmove_overlap(
        buf in prop::collection::vec(any::<u8>(), 2..256),
        shift in 1usize..64,
    ) {
        let len = buf.len();
        let shift = shift.min(len - 1);
        let count = len - shift;

        // Forward: destination starts inside the source region.
        let mut forward = buf.clone();
        let base = forward.as_mut_ptr();
        unsafe { native::raw::memmove(base.add(shift), base, count) };
        prop_assert_eq!(&forward[shift..], &buf[..count]);

        // Backward: source starts inside the destination region.
        let mut backward = buf.clone();
        let base = backward.as_mut_ptr();
        unsafe { native::raw::memmove(base, base.add(shift), count) };
        prop_assert_eq!(&backward[..count], &buf[shift..]);
    }
}

#[test]
fn test_copy_within_out_of_bounds_into_io_error() {
    let mut data = [0u8; 4];
    let err = copy_within(&mut data, 0..8, 0).into_io().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}

// =============================================================================
// CONCURRENCY
// =============================================================================

#[test]
fn test_concurrent_readers() {
    let data: Vec<u8> = (0..1usize << 16).map(|i| (i * 31 % 251) as u8).collect();
    let copy_of = data.clone();

    crossbeam::scope(|s| {
        for t in 0..8u8 {
            let data = &data;
            let copy_of = &copy_of;
            s.spawn(move |_| {
                for _ in 0..50 {
                    assert!(equal(data, copy_of));
                    assert_eq!(find_byte(data, t), baseline::find_byte(data, t));
                }
            });
        }
    })
    .unwrap();
}

#[test]
fn test_concurrent_disjoint_copies() {
    let source: Vec<u8> = (0..8 * 1024usize).map(|i| (i % 253) as u8).collect();
    let mut dest = vec![0u8; source.len()];

    crossbeam::scope(|s| {
        for (dst, src) in dest.chunks_mut(1024).zip(source.chunks(1024)) {
            s.spawn(move |_| {
                assert_eq!(copy(dst, src), 1024);
            });
        }
    })
    .unwrap();

    assert_eq!(dest, source);
}

// =============================================================================
// HARNESS
// =============================================================================

#[test]
fn test_workload_against_all_primitives() {
    let config = BenchConfig::quick();
    for &size in &config.sizes {
        let mut workload = Workload::new(size, config.filler);
        workload.verify_equal(native::equal).unwrap();
        workload.verify_equal(native::ordinal_equal).unwrap();
        workload.verify_miss(native::find_byte, config.needle).unwrap();
        workload.verify_copy(native::copy).unwrap();
    }
}
