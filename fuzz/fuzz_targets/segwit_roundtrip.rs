
extern crate segwit_bech32;

use segwit_bech32::{segwit, SegwitAddress};

fn do_test(data: &[u8]) {
    if data.len() < 2 {
        return;
    }
    let version = data[0];
    let program = &data[1..];

    match segwit::encode("bc", version, program) {
        Err(_) => {},
        Ok(addr) => {
            let (decoded_version, decoded_program) = segwit::decode("bc", &addr).unwrap();
            assert_eq!(decoded_version.to_u8(), version);
            assert_eq!(decoded_program, program);

            let parsed: SegwitAddress = addr.parse().unwrap();
            assert_eq!(parsed.to_string(), addr);
            assert_eq!(SegwitAddress::from_script(&parsed.script_pubkey(), &segwit_bech32::AddressParams::BITCOIN), Some(parsed));
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
