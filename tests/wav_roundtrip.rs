use rand::{rngs::StdRng, SeedableRng};
use signal_lab::{
    dsp::{generate, Params, SignalKind},
    io::{load_wav, save_wav},
};
use tempfile::tempdir;

#[test]
fn saved_signal_reads_back_unchanged() {
    let mut rng = StdRng::seed_from_u64(11);
    let signal = generate(
        SignalKind::Polyharmonic,
        &Params::default(),
        8_000,
        1.0,
        &mut rng,
    );

    let dir = tempdir().unwrap();
    let path = dir.path().join("output.wav");
    save_wav(&signal, 8_000, &path).unwrap();

    let (read, sample_rate) = load_wav(&path).unwrap();
    assert_eq!(sample_rate, 8_000);
    assert_eq!(read.len(), signal.len());
    for (i, (a, b)) in signal.iter().zip(&read).enumerate() {
        assert!((a - b).abs() < 1e-7, "sample {i}: wrote {a}, read {b}");
    }
}

#[test]
fn header_describes_mono_float() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spec.wav");
    save_wav(&[0.0; 16], 22_050, &path).unwrap();

    let spec = hound::WavReader::open(&path).unwrap().spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 22_050);
    assert_eq!(spec.bits_per_sample, 32);
    assert_eq!(spec.sample_format, hound::SampleFormat::Float);
}
