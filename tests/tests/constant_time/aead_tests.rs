// tests/constant_time/aead_tests.rs
// Saturnin-Short open must take the same time whether or not the block verifies

use super::{assert_constant_time, TestConfig, TimingTester};
use saturnin_algorithms::aead::{DemoRounds, SaturninShortAead, ShortVariant, StandardRounds};

type Opening<'a> = (&'a [u8; 16], &'a [u8; 32]);

fn setup<V: ShortVariant>(msg: &[u8]) -> (SaturninShortAead<V>, [u8; 16], [u8; 32]) {
    let key: [u8; 32] = core::array::from_fn(|i| (i * 7) as u8);
    let nonce: [u8; 16] = core::array::from_fn(|i| (0x40 + i) as u8);
    let aead = SaturninShortAead::<V>::new(&key);
    let ciphertext = aead
        .seal_with_nonce(&nonce, msg, None)
        .expect("seal failed");
    (aead, nonce, ciphertext)
}

/// Warm up, then time `open_in_place` on two inputs in alternating batches
fn time_opens<V: ShortVariant>(
    aead: &SaturninShortAead<V>,
    config: &TestConfig,
    a: Opening<'_>,
    b: Opening<'_>,
) -> (Vec<u128>, Vec<u128>) {
    let mut out = [0u8; 15];
    for _ in 0..config.num_warmup {
        let _ = aead.open_in_place(a.0, a.1, None, &mut out);
        let _ = aead.open_in_place(b.0, b.1, None, &mut out);
    }

    let tester = TimingTester::from_config(config);
    let mut out_a = [0u8; 15];
    let mut out_b = [0u8; 15];
    tester.measure_pair(
        || {
            let _ = aead.open_in_place(a.0, a.1, None, &mut out_a);
        },
        || {
            let _ = aead.open_in_place(b.0, b.1, None, &mut out_b);
        },
    )
}

#[test]
fn test_saturnin_short_valid_vs_forged_constant_time() {
    let config = TestConfig::for_aead();
    let (aead, nonce, valid) = setup::<StandardRounds>(b"timing check");
    let mut forged = valid;
    forged[31] ^= 0x01;

    let (t1, t2) = time_opens(&aead, &config, (&nonce, &valid), (&nonce, &forged));
    assert_constant_time("Saturnin-Short open (valid vs forged)", &config, &t1, &t2);
}

#[test]
fn test_saturnin_short_nonce_mismatch_constant_time() {
    let config = TestConfig::for_aead();
    let (aead, nonce, ciphertext) = setup::<StandardRounds>(b"abc");
    let mut wrong_nonce = nonce;
    wrong_nonce[0] ^= 0x80;

    let (t1, t2) = time_opens(
        &aead,
        &config,
        (&nonce, &ciphertext),
        (&wrong_nonce, &ciphertext),
    );
    assert_constant_time("Saturnin-Short open (nonce mismatch)", &config, &t1, &t2);
}

#[test]
fn test_saturnin_short_padding_position_constant_time() {
    // Marker at byte 0 against marker at byte 14
    let config = TestConfig::for_padding_scan();
    let (aead, nonce, short) = setup::<StandardRounds>(b"");
    let (_, _, long) = setup::<StandardRounds>(&[0x5a; 15]);

    let (t1, t2) = time_opens(&aead, &config, (&nonce, &short), (&nonce, &long));
    assert_constant_time("Saturnin-Short open (padding position)", &config, &t1, &t2);
}

// Single super-round variant

#[test]
fn test_saturnin_short_single_round_marker_sweep_constant_time() {
    let config = TestConfig::for_padding_scan();
    let (aead, nonce, empty) = setup::<DemoRounds>(b"");

    for len in [4usize, 9, 14, 15] {
        let (_, _, ciphertext) = setup::<DemoRounds>(&[0x5a; 15][..len]);
        let (t1, t2) = time_opens(&aead, &config, (&nonce, &empty), (&nonce, &ciphertext));
        assert_constant_time(
            &format!("Saturnin-Short R=1 open (marker at 0 vs {})", len),
            &config,
            &t1,
            &t2,
        );
    }
}

#[test]
fn test_saturnin_short_single_round_tamper_sweep_constant_time() {
    let config = TestConfig::for_padding_scan();
    let (aead, nonce, valid) = setup::<DemoRounds>(b"abc");

    // byte 0 lands in the nonce half, byte 31 in the padded message half
    for pos in [0usize, 7, 15, 16, 24, 31] {
        let mut tampered = valid;
        tampered[pos] ^= 0x01;
        let (t1, t2) = time_opens(&aead, &config, (&nonce, &valid), (&nonce, &tampered));
        assert_constant_time(
            &format!("Saturnin-Short R=1 open (valid vs tampered at {})", pos),
            &config,
            &t1,
            &t2,
        );
    }

    let mut first = valid;
    first[0] ^= 0x01;
    let mut last = valid;
    last[31] ^= 0x01;
    let (t1, t2) = time_opens(&aead, &config, (&nonce, &first), (&nonce, &last));
    assert_constant_time(
        "Saturnin-Short R=1 open (tampered at 0 vs 31)",
        &config,
        &t1,
        &t2,
    );
}

#[test]
fn test_saturnin_short_single_round_nonce_mismatch_position_constant_time() {
    // First nonce difference at byte 0 against byte 15
    let config = TestConfig::for_padding_scan();
    let (aead, nonce, ciphertext) = setup::<DemoRounds>(b"abc");
    let mut early = nonce;
    early[0] ^= 0x01;
    let mut late = nonce;
    late[15] ^= 0x01;

    let (t1, t2) = time_opens(&aead, &config, (&early, &ciphertext), (&late, &ciphertext));
    assert_constant_time(
        "Saturnin-Short R=1 open (nonce mismatch at 0 vs 15)",
        &config,
        &t1,
        &t2,
    );
}
