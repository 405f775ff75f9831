use hebench::{BenchConfig, BenchError, Phase, SchemeConfig, TimingStatistics, run_trials};
use sampling::Source;
use schemes::{
    Bfv, Bgv, Ciphertext, KeySet, Parameters, ParametersLiteral, Plaintext, Scheme, SchemeError,
};

fn sub_test<F: FnOnce()>(name: &str, f: F) {
    println!("Running {}", name);
    f();
}

fn small(log_q: Vec<u32>) -> SchemeConfig {
    SchemeConfig {
        library: "test",
        parameters: ParametersLiteral {
            log_n: 5,
            q: vec![],
            log_q,
            t: 193,
            xe: 3.2,
        },
    }
}

fn check_run<S: Scheme>(scheme: &SchemeConfig, trials: usize) {
    let config: BenchConfig = BenchConfig::new(trials).unwrap();
    let results = run_trials::<S>(scheme, &config).unwrap();
    for (phase, samples) in results.series.iter() {
        assert_eq!(samples.len(), trials, "{phase}");
        assert!(samples.iter().all(|x| x.is_finite() && *x >= 0.0), "{phase}");
        let stats: TimingStatistics = TimingStatistics::from_samples(samples).unwrap();
        assert!(stats.stddev >= 0.0);
    }
    assert_eq!(results.slots, 1 << scheme.parameters.log_n);
    assert_eq!(results.plaintext_modulus, scheme.parameters.t);
    assert_eq!(results.decrypted, vec![3u64; results.slots]);
}

#[test]
fn single_trial() {
    check_run::<Bgv>(&small(vec![40, 40]), 1);
    check_run::<Bfv>(&small(vec![40, 40]), 1);
}

#[test]
fn two_trials() {
    check_run::<Bgv>(&small(vec![40, 40]), 2);
    check_run::<Bfv>(&small(vec![40, 40]), 2);
}

#[test]
fn hundred_trials_fill_six_series() {
    let config: BenchConfig = BenchConfig::new(100).unwrap();
    let results = run_trials::<Bgv>(&small(vec![30, 30]), &config).unwrap();
    assert_eq!(results.series.iter().count(), Phase::ALL.len());
    results
        .series
        .iter()
        .for_each(|(_, samples)| assert_eq!(samples.len(), 100));
}

#[test]
fn slot_count_comes_from_the_context() {
    let config: BenchConfig = BenchConfig::new(1).unwrap();
    let results = run_trials::<Bfv>(&small(vec![40, 40]), &config).unwrap();
    assert_eq!(results.slots, 32);
    assert_eq!(results.plaintext_modulus, 193);
    assert_eq!(results.decrypted.len(), 32);
}

#[test]
#[ignore = "ring degrees 4096 and 8192 are slow in debug builds"]
fn fixed_configurations() {
    sub_test("bgv", || check_fixed::<Bgv>(&SchemeConfig::bgv()));
    sub_test("bfv", || check_fixed::<Bfv>(&SchemeConfig::bfv()));
}

fn check_fixed<S: Scheme>(scheme: &SchemeConfig) {
    check_run::<S>(scheme, 1);

    let params: Parameters = Parameters::new(&scheme.parameters).unwrap();
    let context: S::Context = S::context(&params).unwrap();
    let mut source: Source = Source::new([0u8; 32]);
    let keys: KeySet = S::generate_keys(&context, &mut source);
    let slots: usize = S::rlwe(&context).slots();

    let mut encrypt = |values: &[u64]| -> Ciphertext {
        let pt: Plaintext = S::encode(&context, values).unwrap();
        S::encrypt(&context, &keys.public, &pt, &mut source).unwrap()
    };
    let ct1: Ciphertext = encrypt(&vec![1u64; slots]);
    let ct2: Ciphertext = encrypt(&vec![2u64; slots]);

    let ct: Ciphertext = S::mul(&context, &ct1, &ct2).unwrap();
    let ct: Ciphertext = S::relinearize(&context, &keys.relinearization, &ct).unwrap();
    assert_eq!(ct.degree(), 1);
    let pt: Plaintext = S::decrypt(&context, &keys.secret, &ct).unwrap();
    assert_eq!(S::decode(&context, &pt), vec![2u64; slots]);
}

#[test]
fn scheme_errors_abort_the_run() {
    let mut scheme: SchemeConfig = small(vec![40]);
    scheme.parameters.t = 101;
    let config: BenchConfig = BenchConfig::new(3).unwrap();
    assert!(matches!(
        run_trials::<Bfv>(&scheme, &config),
        Err(BenchError::Scheme(SchemeError::BatchingIncompatible { .. }))
    ));
}

#[test]
fn zero_trials_are_rejected_before_running() {
    assert!(matches!(BenchConfig::new(0), Err(BenchError::ZeroTrials)));
}
