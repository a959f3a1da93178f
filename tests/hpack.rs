use std::{fs, path::Path};

use ntex_bytes::BytesMut;
use ntex_httpd::hpack::{self, huffman, Decoder, DecoderError};
use serde_json::Value;
use walkdir::WalkDir;

#[test]
fn hpack_fixtures() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/hpack");
    let mut files = 0;

    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "json") {
            continue;
        }
        test_story(path);
        files += 1;
    }
    assert!(files > 0, "no fixtures in {}", root.display());
}

fn test_story(path: &Path) {
    let story: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let cases = story["cases"].as_array().unwrap();

    let size = cases[0]["header_table_size"].as_u64().unwrap_or(4096) as usize;
    let mut decoder = Decoder::new(size);

    for case in cases {
        let wire = hex::decode(case["wire"].as_str().unwrap()).unwrap();
        let expected: Vec<(String, String)> = case["headers"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|h| {
                h.as_object()
                    .unwrap()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.as_str().unwrap().to_string()))
            })
            .collect();

        let mut decoded = Vec::new();
        decoder
            .decode(&wire, |h| {
                decoded.push((
                    String::from_utf8(h.name.to_vec()).unwrap(),
                    String::from_utf8(h.value.to_vec()).unwrap(),
                ))
            })
            .unwrap_or_else(|e| panic!("{}: seqno {}: {e:?}", path.display(), case["seqno"]));

        assert_eq!(decoded, expected, "{}: seqno {}", path.display(), case["seqno"]);
        assert!(decoder.table().size() <= size);
    }
}

#[test]
fn decode_static_indexed() {
    let mut decoder = Decoder::default();
    let mut out = Vec::new();
    decoder.decode(&[0x90], |h| out.push(h)).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(&out[0].name[..], b"accept-encoding");
    assert_eq!(&out[0].value[..], b"gzip, deflate");
    assert!(!out[0].sensitive);
}

#[test]
fn decode_invalid_dynamic_index() {
    let mut decoder = Decoder::default();
    // index 124 with an empty dynamic table
    let res = decoder.decode(&[0xfc], |_| {});
    assert_eq!(res, Err(DecoderError::InvalidTableIndex));
}

#[test]
fn never_indexed_is_sensitive() {
    let mut decoder = Decoder::default();
    let mut out = Vec::new();
    // never indexed, name `authorization` from the static table
    let mut block = vec![0x1f, 0x08, 0x06];
    block.extend_from_slice(b"secret");
    decoder.decode(&block, |h| out.push(h)).unwrap();

    assert_eq!(&out[0].name[..], b"authorization");
    assert_eq!(&out[0].value[..], b"secret");
    assert!(out[0].sensitive);
    assert_eq!(decoder.table().len(), 0);
}

#[test]
fn size_update_rules() {
    let mut decoder = Decoder::new(4096);
    decoder.queue_size_update(1024);

    assert_eq!(
        decoder.decode(&[0x3f, 0xe2, 0x07], |_| {}),
        Err(DecoderError::InvalidMaxDynamicSize)
    );
    // update to 100
    decoder.decode(&[0x3f, 0x45], |_| {}).unwrap();
    assert_eq!(decoder.table().max_size(), 100);

    assert_eq!(
        decoder.decode(&[0x82, 0x20], |_| {}),
        Err(DecoderError::SizeUpdateNotAtStart)
    );
}

#[test]
fn huffman_round_trip() {
    let samples: &[&[u8]] = &[
        b"",
        b"www.example.com",
        b"no-cache",
        b"Mon, 21 Oct 2013 20:13:21 GMT",
        &[0, 1, 2, 127, 128, 200, 255],
    ];

    for sample in samples {
        let mut encoded = BytesMut::new();
        huffman::encode(sample, &mut encoded);
        assert_eq!(encoded.len(), huffman::encoded_len(sample));

        let mut buf = BytesMut::new();
        let decoded = huffman::decode(&encoded, &mut buf).unwrap();
        assert_eq!(&decoded[..], *sample);
    }
}

#[test]
fn huffman_invalid_padding() {
    let mut buf = BytesMut::new();
    // "a" is 00011, padded with zeros instead of ones
    assert_eq!(
        huffman::decode(&[0x18], &mut buf).unwrap_err(),
        DecoderError::InvalidHuffmanCode
    );
    // a whole byte of padding
    assert_eq!(
        huffman::decode(&[0x1f, 0xff], &mut buf).unwrap_err(),
        DecoderError::InvalidHuffmanCode
    );
}

#[test]
fn header_sizes() {
    let header = hpack::Header::new("custom-key".into(), "custom-header".into());
    assert_eq!(header.len(), 55);
    assert!(!header.is_pseudo());
}
