use berwalk::ber::Mode;
use berwalk::decoder::{self, Abort, Action, Field, Grammar, Op};
use berwalk::header::constants::id;
use berwalk::header::{Header, HeaderError};
use berwalk::oid::{self, Symbol};
use berwalk::x509;
use proptest::prelude::*;

const RSA_KEK_CA: &[u8] = include_bytes!("data/rsa-kek-ca.der");

fn encode_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        return vec![len as u8];
    }
    let bytes: Vec<u8> = len
        .to_be_bytes()
        .iter()
        .copied()
        .skip_while(|b| *b == 0)
        .collect();
    let mut v = vec![0x80 | bytes.len() as u8];
    v.extend(bytes);
    v
}

fn encode_arc(mut arc: u64, out: &mut Vec<u8>) {
    let mut groups = vec![(arc & 0x7f) as u8];
    arc >>= 7;
    while arc > 0 {
        groups.push(0x80 | (arc & 0x7f) as u8);
        arc >>= 7;
    }
    out.extend(groups.iter().rev());
}

fn encode_oid(arcs: &[u64]) -> Vec<u8> {
    let mut out = Vec::new();
    encode_arc(arcs[0] * 40 + arcs[1], &mut out);
    for arc in &arcs[2..] {
        encode_arc(*arc, &mut out);
    }
    out
}

fn dotted(arcs: &[u64]) -> String {
    arcs.iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

fn arcs() -> impl Strategy<Value = Vec<u64>> {
    (0u64..=2)
        .prop_flat_map(|first| {
            let second = if first < 2 { 0u64..40 } else { 0u64..100_000 };
            (
                Just(first),
                second,
                prop::collection::vec(0u64..(1 << 62), 0..8),
            )
        })
        .prop_map(|(first, second, rest)| {
            let mut v = vec![first, second];
            v.extend(rest);
            v
        })
}

#[derive(Default)]
struct Strings(Vec<Vec<u8>>);

fn collect(ctx: &mut Strings, field: &Field<'_>) -> Result<(), Abort> {
    ctx.0.push(field.value.to_vec());
    Ok(())
}

const STRINGS_ACTIONS: &[Action<Strings>] = &[collect];

const SEQUENCE_OF_STRINGS: &[Op] = &[
    Op::expect(id::SEQUENCE),
    Op::expect(id::OCTET_STRING).optional(3).act(0),
    Op::jump_to(1),
    Op::end_seq(),
    Op::complete(),
];

fn decode_strings(data: &[u8]) -> Result<Vec<Vec<u8>>, berwalk::Error> {
    let grammar = Grammar::new(SEQUENCE_OF_STRINGS, STRINGS_ACTIONS)?;
    let mut ctx = Strings::default();
    decoder::decode(grammar, data, &mut ctx)?;
    Ok(ctx.0)
}

#[test]
fn registry_round_trip() {
    for sym in Symbol::ALL {
        let arcs: Vec<u64> = sym
            .dotted()
            .split('.')
            .map(|a| a.parse().unwrap())
            .collect();
        assert_eq!(encode_oid(&arcs), sym.encoded(), "{}", sym.name());
        assert_eq!(oid::lookup(&encode_oid(&arcs)), Some(*sym));
    }
}

proptest! {
    #[test]
    fn header_length_recovery(
        tag in prop::sample::select(vec![id::INTEGER, id::OCTET_STRING, id::SEQUENCE, id::SET, 0xa0, 0x81]),
        len in prop_oneof![0usize..0x100, 0usize..0x20000],
    ) {
        let mut buf = vec![tag];
        buf.extend(encode_length(len));
        let size = buf.len();
        buf.resize(size + len, 0);

        let hdr = Header::decode(&buf, Mode::Der).unwrap();
        prop_assert_eq!(hdr.tag_byte, tag);
        prop_assert_eq!(hdr.size, size);
        prop_assert_eq!(hdr.content_length(), Some(len));
        prop_assert_eq!(hdr.is_constructed(), tag & 0x20 != 0);

        if len > 0 {
            prop_assert_eq!(
                Header::decode(&buf[..buf.len() - 1], Mode::Der),
                Err(HeaderError::LengthOverflow)
            );
        }
    }

    #[test]
    fn render_matches_arcs(arcs in arcs()) {
        let encoded = encode_oid(&arcs);
        let text = dotted(&arcs);
        prop_assert_eq!(oid::render_to_string(&encoded).unwrap(), text.clone());

        let mut exact = vec![0u8; text.len()];
        prop_assert_eq!(oid::render(&encoded, &mut exact), Ok(text.len()));
        prop_assert_eq!(&exact[..], text.as_bytes());

        let mut short = vec![0u8; text.len() - 1];
        let rendered = oid::render(&encoded, &mut short);
        prop_assert!(
            matches!(rendered, Err(oid::RenderError::BufferTooSmall { .. })),
            "short buffer gave {:?}",
            rendered
        );
    }

    #[test]
    fn lookup_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..24)) {
        let found = oid::lookup(&data);
        prop_assert_eq!(found, oid::lookup(&data));
        if let Some(sym) = found {
            prop_assert_eq!(sym.encoded(), &data[..]);
        }
    }

    #[test]
    fn indefinite_equals_definite(
        strings in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..200), 0..8),
    ) {
        let mut content = Vec::new();
        for s in &strings {
            content.push(id::OCTET_STRING);
            content.extend(encode_length(s.len()));
            content.extend_from_slice(s);
        }
        let mut definite = vec![id::SEQUENCE];
        definite.extend(encode_length(content.len()));
        definite.extend_from_slice(&content);

        let mut indefinite = vec![id::SEQUENCE, 0x80];
        indefinite.extend_from_slice(&content);
        indefinite.extend_from_slice(&[0, 0]);

        prop_assert_eq!(decode_strings(&definite).unwrap(), strings.clone());
        prop_assert_eq!(decode_strings(&indefinite).unwrap(), strings);
    }

    #[test]
    fn garbage_never_panics(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = x509::summarize(&data);
        let _ = decode_strings(&data);
    }

    #[test]
    fn corrupted_certificate_never_panics(
        at in 0..RSA_KEK_CA.len(),
        byte in any::<u8>(),
    ) {
        let mut data = RSA_KEK_CA.to_vec();
        data[at] = byte;
        if let Err(e) = x509::summarize(&data) {
            prop_assert!(e.offset().map_or(true, |o| o <= data.len()), "{:?}", e);
        }
    }
}
