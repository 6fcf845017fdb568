
extern crate segwit_bech32;

use segwit_bech32::codec;

fn do_test(data: &[u8]) {
    let s = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };
    match codec::decode_with_length_check(s, false) {
        Err(_) => {},
        Ok((hrp, values, variant)) => {
            let mut reser = String::new();
            codec::encode_to_fmt(&mut reser, &hrp, &values, variant).unwrap();
            assert_eq!(s.to_lowercase(), reser);
        },
    }
}

#[cfg(feature = "afl")]
extern crate afl;
#[cfg(feature = "afl")]
fn main() {
    afl::read_stdio_bytes(|data| {
        do_test(&data);
    });
}

#[cfg(feature = "honggfuzz")]
#[macro_use] extern crate honggfuzz;
#[cfg(feature = "honggfuzz")]
fn main() {
    loop {
        fuzz!(|data| {
            do_test(data);
        });
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn mixed_hrp_with_separators() {
        super::do_test(b"a1b1c1qqqqqqqq");
        super::do_test(b"A12UEL5L");
        super::do_test(b"11qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqc8247j");
    }
}
