use fixtures::LineOp::*;
use fixtures::{
    config_image, get_configured_nrf905, get_nrf905, read_response, FakeLines, Ops, TestFixture,
};

use crate::config::Config;
use crate::mod_params::{RadioError, RadioMode};

#[test]
fn test_power_up_sequence() {
    let radio = get_nrf905(TestFixture::new(), FakeLines::new());
    let (spi, lines) = radio.release();
    assert_eq!(spi.ops, vec![]);
    assert_eq!(
        lines.ops,
        vec![
            Power(true),
            TxEnable(false),
            ChipEnable(false),
            // release tail
            ChipEnable(false),
            TxEnable(false),
            Power(false),
        ]
    );
}

#[test]
fn test_set_config_writes_then_verifies() {
    let mut spi = TestFixture::new();
    spi.respond(&read_response(0x00, &config_image()));
    let mut radio = get_nrf905(spi, FakeLines::new());

    let verified = radio.set_config(&Config::default()).unwrap();
    assert_eq!(verified, config_image());

    let (spi, _) = radio.release();
    assert_eq!(
        spi.ops,
        vec![
            Ops::Write(vec![0x00, 0x6C, 0x0C, 0x44, 0x20, 0x20, 0xEF, 0xBE, 0xAD, 0xDE, 0x18]),
            Ops::Transfer(vec![0x10]),
        ]
    );
}

#[test]
fn test_set_config_read_back_mismatch_is_hard_fault() {
    let mut wrong = config_image();
    wrong[0] ^= 0xFF;
    let mut spi = TestFixture::new();
    spi.respond(&read_response(0x00, &wrong));
    let mut radio = get_nrf905(spi, FakeLines::new());

    assert_eq!(radio.set_config(&Config::default()), Err(RadioError::ConfigMismatch));
    // The failed load leaves the driver unconfigured.
    assert_eq!(radio.transmit(&[0x55], 0x01, 5), Err(RadioError::NotConfigured));
}

#[test]
fn test_transmit_sequence() {
    let mut lines = FakeLines::new();
    lines.dr_levels.push_back(true);
    let mut radio = get_configured_nrf905(TestFixture::new(), lines);

    radio.transmit(&[0x01, 0x02, 0x03], 0xDEAD_BEEF, 15).unwrap();

    let (spi, lines) = radio.release();
    assert_eq!(
        spi.ops,
        vec![
            Ops::Write(vec![0x00, 0x6C, 0x0C, 0x44, 0x20, 0x20, 0xEF, 0xBE, 0xAD, 0xDE, 0x18]),
            Ops::Transfer(vec![0x10]),
            Ops::Write(vec![0x22, 0xEF, 0xBE, 0xAD, 0xDE]),
            Ops::Write(vec![0x20, 0x01, 0x02, 0x03]),
        ]
    );
    assert_eq!(
        lines.ops,
        vec![
            Power(true),
            TxEnable(false),
            ChipEnable(false),
            // Transmit, then the post-send drop into Receive
            TxEnable(true),
            ChipEnable(true),
            TxEnable(false),
            ChipEnable(true),
            // release tail
            ChipEnable(false),
            TxEnable(false),
            Power(false),
        ]
    );
}

#[test]
fn test_transmit_oversize_payload_skips_the_bus() {
    let mut radio = get_configured_nrf905(TestFixture::new(), FakeLines::new());

    let oversize = [0u8; 33];
    assert_eq!(
        radio.transmit(&oversize, 0x01, 5),
        Err(RadioError::PayloadSizeUnexpected(33))
    );

    let (spi, _) = radio.release();
    // Nothing beyond the set_config transactions.
    assert_eq!(spi.ops.len(), 2);
}

#[test]
fn test_transmit_timeout_still_returns_to_receive() {
    let mut radio = get_configured_nrf905(TestFixture::new(), FakeLines::new());

    assert_eq!(
        radio.transmit(&[0xAA], 0x0000_0001, 5),
        Err(RadioError::TransmitTimeout)
    );

    let (spi, lines) = radio.release();
    assert_eq!(spi.ops[2], Ops::Write(vec![0x22, 0x01, 0x00, 0x00, 0x00]));
    assert_eq!(spi.ops[3], Ops::Write(vec![0x20, 0xAA]));
    assert_eq!(
        lines.ops,
        vec![
            Power(true),
            TxEnable(false),
            ChipEnable(false),
            TxEnable(true),
            ChipEnable(true),
            TxEnable(false),
            ChipEnable(true),
            ChipEnable(false),
            TxEnable(false),
            Power(false),
        ]
    );
}

#[test]
fn test_receive_with_nothing_pending() {
    let mut radio = get_configured_nrf905(TestFixture::new(), FakeLines::new());

    let mut buf = [0u8; 32];
    assert_eq!(radio.receive(&mut buf), Ok(false));

    let (spi, _) = radio.release();
    assert_eq!(spi.ops.len(), 2);
}

#[test]
fn test_receive_address_match_without_data_ready() {
    let mut lines = FakeLines::new();
    lines.am_levels.push_back(true);
    let mut radio = get_configured_nrf905(TestFixture::new(), lines);

    let mut buf = [0u8; 32];
    assert_eq!(radio.receive(&mut buf), Ok(false));

    let (spi, _) = radio.release();
    assert_eq!(spi.ops.len(), 2);
}

#[test]
fn test_receive_frame() {
    let mut frame = [0u8; 32];
    for (i, byte) in frame.iter_mut().enumerate() {
        *byte = i as u8;
    }

    let mut spi = TestFixture::new();
    spi.respond(&read_response(0x00, &frame));
    let mut lines = FakeLines::new();
    lines.am_levels.push_back(true);
    lines.dr_levels.push_back(true);
    let mut radio = get_configured_nrf905(spi, lines);

    let mut buf = [0u8; 32];
    assert_eq!(radio.receive(&mut buf), Ok(true));
    assert_eq!(buf, frame);

    let (spi, lines) = radio.release();
    assert_eq!(spi.ops[2], Ops::Transfer(vec![0x24]));
    assert_eq!(
        lines.ops,
        vec![
            Power(true),
            TxEnable(false),
            ChipEnable(false),
            // Receive, then back to Idle once the frame is out
            TxEnable(false),
            ChipEnable(true),
            TxEnable(false),
            ChipEnable(false),
            ChipEnable(false),
            TxEnable(false),
            Power(false),
        ]
    );
}

#[test]
fn test_receive_requires_configuration() {
    let mut radio = get_nrf905(TestFixture::new(), FakeLines::new());
    let mut buf = [0u8; 32];
    assert_eq!(radio.receive(&mut buf), Err(RadioError::NotConfigured));

    let (spi, _) = radio.release();
    assert_eq!(spi.ops, vec![]);
}

#[test]
fn test_set_mode_is_idempotent() {
    let mut radio = get_nrf905(TestFixture::new(), FakeLines::new());
    radio.set_mode(RadioMode::Idle).unwrap();
    radio.set_mode(RadioMode::Receive).unwrap();
    radio.set_mode(RadioMode::Receive).unwrap();

    let (_, lines) = radio.release();
    assert_eq!(
        lines.ops,
        vec![
            Power(true),
            TxEnable(false),
            ChipEnable(false),
            // One Receive entry for the two requests
            TxEnable(false),
            ChipEnable(true),
            ChipEnable(false),
            TxEnable(false),
            Power(false),
        ]
    );
}

#[test]
fn test_sleep_and_wake_keep_configuration() {
    let mut lines = FakeLines::new();
    lines.dr_levels.push_back(true);
    let mut radio = get_configured_nrf905(TestFixture::new(), lines);

    radio.sleep().unwrap();
    radio.wake().unwrap();
    radio.transmit(&[0x01], 0x02, 5).unwrap();

    let (_, lines) = radio.release();
    assert_eq!(
        lines.ops[3..8],
        [
            // sleep: PowerDown then PWR_UP low
            ChipEnable(false),
            Power(false),
            // wake: PWR_UP high, back to Idle
            Power(true),
            TxEnable(false),
            ChipEnable(false),
        ]
    );
}

#[test]
fn test_read_status() {
    let mut spi = TestFixture::new();
    spi.respond(&[0xA5]);
    let mut radio = get_nrf905(spi, FakeLines::new());

    assert_eq!(radio.read_status(), Ok(0xA5));

    let (spi, _) = radio.release();
    assert_eq!(spi.ops, vec![Ops::Transfer(vec![0x10])]);
}

#[test]
fn test_read_config_round_trips_the_register() {
    let mut spi = TestFixture::new();
    spi.respond(&read_response(0x00, &config_image()));
    let mut radio = get_nrf905(spi, FakeLines::new());

    assert_eq!(radio.read_config(), Ok(Config::default()));
}

#[test]
fn test_read_config_bytes_is_length_checked() {
    let mut spi = TestFixture::new();
    spi.respond(&read_response(0x00, &config_image()[..4]));
    let mut radio = get_nrf905(spi, FakeLines::new());

    let mut partial = [0u8; 4];
    radio.read_config_bytes(&mut partial).unwrap();
    assert_eq!(partial, [0x6C, 0x0C, 0x44, 0x20]);

    let mut oversize = [0u8; 11];
    assert_eq!(
        radio.read_config_bytes(&mut oversize),
        Err(RadioError::PayloadSizeUnexpected(11))
    );

    let (spi, _) = radio.release();
    // The oversize request never reached the bus.
    assert_eq!(spi.ops, vec![Ops::Transfer(vec![0x10])]);
}

#[test]
fn test_read_tx_registers() {
    let mut spi = TestFixture::new();
    spi.respond(&read_response(0x00, &[0x11, 0x22]));
    spi.respond(&read_response(0x00, &[0xEF, 0xBE, 0xAD, 0xDE]));
    let mut radio = get_nrf905(spi, FakeLines::new());

    let mut payload = [0u8; 2];
    radio.read_tx_payload(&mut payload).unwrap();
    assert_eq!(payload, [0x11, 0x22]);
    assert_eq!(radio.read_tx_address(), Ok([0xEF, 0xBE, 0xAD, 0xDE]));

    let (spi, _) = radio.release();
    assert_eq!(spi.ops, vec![Ops::Transfer(vec![0x21]), Ops::Transfer(vec![0x23])]);
}
