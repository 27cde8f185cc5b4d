//! Library for creating and parsing the fixed-size radio packets.
#![no_std]
#![deny(rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod creator;
pub mod packet_length;
pub mod parser;
pub mod types;

#[test]
fn undecodable_setting_surfaces_once() {
    use parser::*;
    use types::*;
    // Packet: (dest: 0002, src: 0001, kind: Config, ts: 0045, payload: RoundCount=5 then index 2a)
    let data = [0x02, 0x00, 0x01, 0x00, 0x01, 0x45, 0x00, 0x01, 0x05, 0x00, 0x2a, 0x01];
    let p = Packet::new(&data[..]).unwrap();

    assert_eq!(p.kind(), PacketType::Config);
    assert_eq!(p.timestamp(), 0x45);

    let mut settings = p.settings();
    assert_eq!(settings.next(), Some(Ok((Setting::RoundCount, Value::Uint16(5)))));
    assert_eq!(settings.next(), Some(Err(Error::UnknownSetting(0x2a))));
    assert_eq!(settings.next(), None);
}
