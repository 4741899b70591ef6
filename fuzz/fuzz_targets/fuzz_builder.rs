#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use runebuilder::{
    StringBuilder, search,
    reference::{Op, ReferenceBuilder},
};

/// Upper bound for generated indices; larger values only ever hit the same
/// error paths.
const MAX_INDEX: usize = 64;

#[derive(Debug)]
struct FuzzOp(Op);

impl<'a> Arbitrary<'a> for FuzzOp {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let op = match u.choose_index(16)? {
            0 => Op::Append(u.arbitrary()?),
            1 => Op::AppendLine(u.arbitrary()?),
            2 => Op::AppendRune(u.arbitrary()?),
            3 => Op::AppendList(u.arbitrary()?),
            4 => Op::AppendBytes(u.arbitrary()?),
            5 => Op::Insert(u.int_in_range(0..=MAX_INDEX)?, u.arbitrary()?),
            6 => Op::Remove(u.int_in_range(0..=MAX_INDEX)?, u.int_in_range(0..=MAX_INDEX)?),
            7 => Op::Clear,
            8 => Op::SetRuneAt(u.int_in_range(0..=MAX_INDEX)?, u.arbitrary()?),
            9 => Op::Trim,
            10 => Op::TrimStart,
            11 => Op::TrimEnd,
            12 => Op::Reverse,
            13 => Op::Replace(u.arbitrary()?, u.arbitrary()?),
            14 => Op::ReplaceRune(u.arbitrary()?, u.arbitrary()?),
            _ => Op::AppendRunes(u.arbitrary()?),
        };
        Ok(FuzzOp(op))
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    ops: Vec<FuzzOp>,
    needle: String,
}

fn check(input: Input) {
    let mut sb = StringBuilder::with_capacity(usize::from(input.capacity));
    let mut model = ReferenceBuilder::default();

    for FuzzOp(op) in &input.ops {
        assert_eq!(op.apply(&mut sb), model.apply(op), "{op:?}");
        assert_eq!(sb.as_runes(), model.as_runes(), "{op:?}");
        assert!(sb.len() <= sb.capacity());
    }

    let needle: Vec<char> = input.needle.chars().collect();
    let all = search::find_all(sb.as_runes(), &needle);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(search::find_first(sb.as_runes(), &needle), all.first().copied());
    assert_eq!(search::find_last(sb.as_runes(), &needle), all.last().copied());
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = Input::arbitrary_take_rest(Unstructured::new(data)) {
        check(input);
    }
});
