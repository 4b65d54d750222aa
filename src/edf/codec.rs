//! Line-level byte codec for data files
//!
//! Data files are Windows-1252 text. Apart from the credits and checksum
//! files, each line is additionally scrambled: its bytes are interleaved
//! and, for most roles, runs of bytes divisible by 7 are reversed first.
//! Both transforms are permutations, so a line never changes length and
//! never gains line-break bytes.

use super::slot::LineEncoding;

/// Multiple used by the swap transform
const SWAP_MULTIPLE: u8 = 7;

/// Windows-1252 code points for bytes 0x80..=0x9F.
///
/// The five bytes the code page leaves undefined map to the C1 control
/// with the same value, which keeps decoding total and encoding lossless.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

/// Decode Windows-1252 bytes
pub fn decode_cp1252(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => CP1252_HIGH[usize::from(b - 0x80)],
            _ => char::from(b),
        })
        .collect()
}

/// Encode a single character, if Windows-1252 can represent it
pub fn encode_cp1252_char(ch: char) -> Option<u8> {
    let code = u32::from(ch);
    match code {
        0x00..=0x7F | 0xA0..=0xFF => Some(code as u8),
        _ => CP1252_HIGH
            .iter()
            .position(|&c| c == ch)
            .map(|i| 0x80 + i as u8),
    }
}

/// Encode to Windows-1252, replacing unrepresentable characters with `?`
pub fn encode_cp1252(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| encode_cp1252_char(ch).unwrap_or(b'?'))
        .collect()
}

/// Place bytes at even positions ascending, then odd positions descending
pub fn interleave(data: &mut [u8]) {
    let len = data.len();
    let mut buffer = vec![0u8; len];
    for (source, target) in interleave_order(len).enumerate() {
        buffer[target] = data[source];
    }
    data.copy_from_slice(&buffer);
}

/// Inverse of [`interleave`]
pub fn deinterleave(data: &mut [u8]) {
    let len = data.len();
    let mut buffer = vec![0u8; len];
    for (target, source) in interleave_order(len).enumerate() {
        buffer[target] = data[source];
    }
    data.copy_from_slice(&buffer);
}

/// Positions visited by the interleave walk: 0, 2, 4, ... then the last odd
/// index down to 1.
fn interleave_order(len: usize) -> impl Iterator<Item = usize> {
    let evens = (0..len).step_by(2);
    let last_odd = if len % 2 == 0 { len } else { len - 1 };
    let odds = (1..last_odd).step_by(2).rev();
    evens.chain(odds)
}

/// Reverse every run of two or more consecutive bytes divisible by `multiple`
pub fn swap_multiples(data: &mut [u8], multiple: u8) {
    if multiple == 0 {
        return;
    }

    let mut run_start = 0;
    for i in 0..=data.len() {
        let in_run = i < data.len() && data[i] % multiple == 0;
        if !in_run {
            if i - run_start > 1 {
                data[run_start..i].reverse();
            }
            run_start = i + 1;
        }
    }
}

/// Decode one on-disk line into text
pub fn decode_line(raw: &[u8], encoding: LineEncoding) -> String {
    let mut data = raw.to_vec();
    match encoding {
        LineEncoding::Plain => {}
        LineEncoding::Interleaved => deinterleave(&mut data),
        LineEncoding::InterleavedSwapped => {
            deinterleave(&mut data);
            swap_multiples(&mut data, SWAP_MULTIPLE);
        }
    }
    decode_cp1252(&data)
}

/// Encode one line of text into its on-disk bytes
pub fn encode_line(line: &str, encoding: LineEncoding) -> Vec<u8> {
    let mut data = encode_cp1252(line);
    match encoding {
        LineEncoding::Plain => {}
        LineEncoding::Interleaved => interleave(&mut data),
        LineEncoding::InterleavedSwapped => {
            swap_multiples(&mut data, SWAP_MULTIPLE);
            interleave(&mut data);
        }
    }
    data
}

/// Split file content on `\r\n`, `\n` or `\r`.
///
/// Like a regex split, content ending in a terminator yields a trailing
/// empty line and empty content yields a single empty line.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < content.len() {
        match content[i] {
            b'\r' => {
                lines.push(&content[start..i]);
                if content.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            b'\n' => {
                lines.push(&content[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    lines.push(&content[start..]);
    lines
}
