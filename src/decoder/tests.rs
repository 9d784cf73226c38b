use super::*;
use crate::ber::Mode;
use crate::header::constants::id;
use alloc::vec::Vec;
use hex_literal::hex;

#[derive(Default, Debug)]
struct Log {
    fields: Vec<(usize, u8, Vec<u8>)>,
    offsets: Vec<usize>,
}

fn record(log: &mut Log, field: &Field<'_>) -> Result<(), Abort> {
    log.fields
        .push((field.index, field.tag, field.value.to_vec()));
    log.offsets.push(field.offset);
    Ok(())
}

fn refuse(_: &mut Log, _: &Field<'_>) -> Result<(), Abort> {
    Err(Abort::new(7))
}

const ACTIONS: &[Action<Log>] = &[record, refuse];

fn run(ops: &[Op], data: &[u8]) -> Result<Log, Error> {
    run_with(ops, data, Options::default())
}

fn run_with(ops: &[Op], data: &[u8], options: Options) -> Result<Log, Error> {
    let grammar = Grammar::new(ops, ACTIONS)?;
    let mut log = Log::default();
    Decoder::with_options(grammar, options).decode(data, &mut log)?;
    Ok(log)
}

const TWO_INTEGERS: &[Op] = &[
    Op::expect(id::SEQUENCE),
    Op::expect(id::INTEGER).act(0),
    Op::expect(id::INTEGER).act(0),
    Op::end_seq().act(0),
    Op::complete(),
];

#[test]
fn sequence_of_two_integers() {
    let data = hex!("3006020101020102");
    let log = run(TWO_INTEGERS, &data).unwrap();
    assert_eq!(
        log.fields,
        std::vec![
            (1, id::INTEGER, std::vec![0x01]),
            (2, id::INTEGER, std::vec![0x02]),
            (3, id::SEQUENCE, data[2..].to_vec()),
        ]
    );
    assert_eq!(log.offsets, std::vec![4, 7, 2]);
}

const SERIAL: &[Op] = &[
    Op::expect(id::SEQUENCE),
    Op::expect(id::context_constructed(0)).optional(4),
    Op::expect(id::INTEGER),
    Op::end_seq(),
    Op::expect(id::INTEGER).act(0),
    Op::end_seq(),
    Op::complete(),
];

#[test]
fn optional_version_then_serial() {
    let with_version = run(SERIAL, &hex!("3008a003020102020105")).unwrap();
    assert_eq!(with_version.fields, std::vec![(4, id::INTEGER, std::vec![0x05])]);

    let without_version = run(SERIAL, &hex!("3003020105")).unwrap();
    assert_eq!(without_version.fields, with_version.fields);
}

const NESTED: &[Op] = &[
    Op::expect(id::SEQUENCE),
    Op::expect(id::SEQUENCE),
    Op::expect(id::INTEGER).act(0),
    Op::end_seq(),
    Op::expect(id::OCTET_STRING).act(0),
    Op::end_seq().act(0),
    Op::complete(),
];

#[test]
fn indefinite_matches_definite() {
    let definite = run(NESTED, &hex!("300a30030201070403616263")).unwrap();
    let indefinite = run(NESTED, &hex!("3080308002010700000403616263 0000")).unwrap();

    let primitives = |log: &Log| -> Vec<(usize, u8, Vec<u8>)> {
        log.fields
            .iter()
            .filter(|(_, tag, _)| *tag != id::SEQUENCE)
            .cloned()
            .collect()
    };
    assert_eq!(primitives(&definite), primitives(&indefinite));
    assert_eq!(
        primitives(&definite),
        std::vec![
            (2, id::INTEGER, std::vec![0x07]),
            (4, id::OCTET_STRING, b"abc".to_vec()),
        ]
    );

    // closing the outer element hands over its whole content
    let (_, _, outer) = indefinite.fields.last().unwrap();
    assert_eq!(outer, &hex!("308002010700000403616263").to_vec());
}

const TIME_CHOICE: &[Op] = &[
    Op::expect(id::SEQUENCE),
    Op::expect(id::UTC_TIME).optional(2).act(0),
    Op::expect(id::GENERALIZED_TIME).cond(3).act(0),
    Op::end_seq(),
    Op::complete(),
];

#[test]
fn alternatives() {
    let utc = run(TIME_CHOICE, &hex!("3003170141")).unwrap();
    assert_eq!(utc.fields, std::vec![(1, id::UTC_TIME, b"A".to_vec())]);

    let generalized = run(TIME_CHOICE, &hex!("3003180142")).unwrap();
    assert_eq!(
        generalized.fields,
        std::vec![(2, id::GENERALIZED_TIME, b"B".to_vec())]
    );

    assert_eq!(
        run(TIME_CHOICE, &hex!("3003040100")).unwrap_err(),
        Error::GrammarMismatch {
            offset: 2,
            action: 2,
            tag: id::OCTET_STRING
        }
    );
}

const INTEGERS: &[Op] = &[
    Op::expect(id::SEQUENCE),
    Op::expect(id::INTEGER).optional(3).act(0),
    Op::jump_to(1),
    Op::end_seq(),
    Op::complete(),
];

#[test]
fn repetition() {
    let log = run(INTEGERS, &hex!("3009020101020102020103")).unwrap();
    let values: Vec<u8> = log.fields.iter().map(|(_, _, v)| v[0]).collect();
    assert_eq!(values, std::vec![1, 2, 3]);

    let empty = run(INTEGERS, &hex!("3000")).unwrap();
    assert!(empty.fields.is_empty());
}

const SKIPPED: &[Op] = &[
    Op::expect(id::SEQUENCE),
    Op::any().skip().act(0),
    Op::expect(id::INTEGER).act(0),
    Op::end_seq(),
    Op::complete(),
];

#[test]
fn skip_constructed() {
    let log = run(SKIPPED, &hex!("3080 30800401aa0000 020109 0000")).unwrap();
    assert_eq!(
        log.fields,
        std::vec![
            (1, id::SEQUENCE, hex!("0401aa").to_vec()),
            (2, id::INTEGER, std::vec![0x09]),
        ]
    );

    let log = run(SKIPPED, &hex!("3008 30030401aa 020109")).unwrap();
    assert_eq!(log.fields[0], (1, id::SEQUENCE, hex!("0401aa").to_vec()));
}

#[test]
fn callback_abort() {
    let ops = [Op::expect(id::INTEGER).act(1), Op::complete()];
    assert_eq!(
        run(&ops, &hex!("020105")).unwrap_err(),
        Error::CallbackAborted {
            offset: 2,
            action: 0,
            code: 7
        }
    );
}

#[test]
fn mandatory_mismatch() {
    let ops = [Op::expect(id::INTEGER), Op::complete()];
    assert_eq!(
        run(&ops, &hex!("040100")).unwrap_err(),
        Error::GrammarMismatch {
            offset: 0,
            action: 0,
            tag: id::OCTET_STRING
        }
    );
}

#[test]
fn element_ends_early() {
    assert_eq!(
        run(TWO_INTEGERS, &hex!("3003020101")).unwrap_err(),
        Error::UnexpectedEndOfScope {
            offset: 5,
            action: 2
        }
    );
}

#[test]
fn element_ends_late() {
    let ops = [
        Op::expect(id::SEQUENCE),
        Op::expect(id::INTEGER),
        Op::end_seq(),
        Op::complete(),
    ];
    assert_eq!(
        run(&ops, &hex!("3006020101020102")).unwrap_err(),
        Error::GrammarMismatch {
            offset: 5,
            action: 2,
            tag: id::INTEGER
        }
    );
}

#[test]
fn excess_data() {
    let ops = [Op::expect(id::INTEGER), Op::complete()];
    assert_eq!(
        run(&ops, &hex!("02010500")).unwrap_err(),
        Error::ExcessData { offset: 3 }
    );
}

#[test]
fn truncated_inputs() {
    assert_eq!(
        run(TWO_INTEGERS, &hex!("30050201")).unwrap_err(),
        Error::LengthOverflow { offset: 0 }
    );
    assert_eq!(
        run(TWO_INTEGERS, &hex!("30")).unwrap_err(),
        Error::TruncatedInput { offset: 0 }
    );
    assert_eq!(
        run(TWO_INTEGERS, &[]).unwrap_err(),
        Error::TruncatedInput { offset: 0 }
    );

    let ops = [
        Op::expect(id::SEQUENCE),
        Op::expect(id::INTEGER),
        Op::end_seq(),
        Op::complete(),
    ];
    assert_eq!(
        run(&ops, &hex!("3080020101")).unwrap_err(),
        Error::TruncatedInput { offset: 5 }
    );
}

#[test]
fn indefinite_primitive() {
    let ops = [Op::expect(id::OCTET_STRING), Op::complete()];
    assert_eq!(
        run(&ops, &hex!("0480000000")).unwrap_err(),
        Error::InvalidIndefiniteOnPrimitive { offset: 0 }
    );
}

#[test]
fn der_mode() {
    let der = Options::default().with_mode(Mode::Der);
    assert!(run_with(NESTED, &hex!("300a30030201070403616263"), der).is_ok());
    assert_eq!(
        run_with(NESTED, &hex!("3080308002010700000403616263 0000"), der).unwrap_err(),
        Error::IndefiniteLengthDer { offset: 0 }
    );
    assert_eq!(
        run_with(TWO_INTEGERS, &hex!("308106020101020102"), der).unwrap_err(),
        Error::NonCanonicalLength { offset: 0 }
    );
    // the same non-minimal length is fine in BER
    assert!(run(TWO_INTEGERS, &hex!("308106020101020102")).is_ok());
}

#[test]
fn nesting_limit() {
    let ops = [
        Op::expect(id::SEQUENCE),
        Op::expect(id::SEQUENCE),
        Op::end_seq(),
        Op::end_seq(),
        Op::complete(),
    ];
    assert!(run(&ops, &hex!("30023000")).is_ok());
    assert_eq!(
        run_with(&ops, &hex!("30023000"), Options::default().with_max_depth(1)).unwrap_err(),
        Error::NestingTooDeep {
            offset: 2,
            depth: 1
        }
    );
}

#[test]
fn looping_grammar() {
    let ops = [Op::jump_to(0), Op::complete()];
    assert_eq!(
        run(&ops, &[]).unwrap_err(),
        Error::InvalidGrammar { action: 0 }
    );
}

#[test]
fn close_without_open_element() {
    let ops = [Op::end_seq(), Op::complete()];
    assert_eq!(
        run(&ops, &[]).unwrap_err(),
        Error::InvalidGrammar { action: 0 }
    );
}

#[test]
fn complete_with_open_element() {
    let ops = [Op::expect(id::SEQUENCE), Op::complete()];
    assert_eq!(
        run(&ops, &hex!("3000")).unwrap_err(),
        Error::UnexpectedEndOfScope {
            offset: 2,
            action: 1
        }
    );
}

#[test]
fn long_form_tag() {
    // [32] takes two identifier bytes, 9f 20
    let data = hex!("9f200100");
    let ops = [Op::expect(0x9f).act(0), Op::complete()];
    assert_eq!(
        run(&ops, &data).unwrap_err(),
        Error::GrammarMismatch {
            offset: 0,
            action: 0,
            tag: 0x9f
        }
    );

    let ops = [Op::any().act(0), Op::complete()];
    let log = run(&ops, &data).unwrap();
    assert_eq!(log.fields, std::vec![(0, 0x9f, std::vec![0x00])]);
}

#[test]
fn end_of_contents_in_definite_element() {
    let ops = [
        Op::expect(id::SEQUENCE),
        Op::any().act(0),
        Op::end_seq(),
        Op::complete(),
    ];
    assert_eq!(
        run(&ops, &hex!("30020000")).unwrap_err(),
        Error::GrammarMismatch {
            offset: 2,
            action: 1,
            tag: 0
        }
    );

    let ops = [
        Op::expect(id::SEQUENCE),
        Op::expect(id::INTEGER).optional(2),
        Op::end_seq(),
        Op::complete(),
    ];
    assert_eq!(
        run(&ops, &hex!("30020000")).unwrap_err(),
        Error::GrammarMismatch {
            offset: 2,
            action: 1,
            tag: 0
        }
    );
}
