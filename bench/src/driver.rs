use crate::config::{BenchConfig, SchemeConfig};
use crate::error::Result;
use crate::timer::measure;
use sampling::{Source, new_seed};
use schemes::{Ciphertext, KeySet, Parameters, Plaintext, Scheme};
use std::fmt;
use tracing::{debug, info, info_span};

/// The six timed phases of a trial, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    ContextBuild,
    KeyGeneration,
    Encryption,
    Addition,
    Multiplication,
    Decryption,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::ContextBuild,
        Phase::KeyGeneration,
        Phase::Encryption,
        Phase::Addition,
        Phase::Multiplication,
        Phase::Decryption,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Label of the statistical report, "Average <label>: ...".
    pub fn statistical_label(self) -> &'static str {
        match self {
            Phase::ContextBuild => "parameter setup time",
            Phase::KeyGeneration => "key generation time",
            Phase::Encryption => "encryption time",
            Phase::Addition => "addition time",
            Phase::Multiplication => "multiplication time",
            Phase::Decryption => "decryption time",
        }
    }

    /// Label of the single-run report, "<Label>: ...".
    pub fn single_run_label(self) -> &'static str {
        match self {
            Phase::ContextBuild => "Context creation",
            Phase::KeyGeneration => "Key generation",
            Phase::Encryption => "Encryption (2 vectors)",
            Phase::Addition => "Homomorphic addition",
            Phase::Multiplication => "Homomorphic multiplication",
            Phase::Decryption => "Decryption",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.single_run_label())
    }
}

/// Per-phase durations in seconds, indexed by trial ordinal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhaseSeries([Vec<f64>; 6]);

impl PhaseSeries {
    pub fn with_capacity(trials: usize) -> Self {
        Self(std::array::from_fn(|_| Vec::with_capacity(trials)))
    }

    pub fn push(&mut self, phase: Phase, seconds: f64) {
        self.0[phase.index()].push(seconds)
    }

    pub fn get(&self, phase: Phase) -> &[f64] {
        &self.0[phase.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Phase, &[f64])> {
        Phase::ALL.into_iter().map(|phase| (phase, self.get(phase)))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrialResults {
    pub series: PhaseSeries,
    /// Decoded slots of the last trial's addition result.
    pub decrypted: Vec<u64>,
    /// Slot count of the last trial's context.
    pub slots: usize,
    /// Plaintext modulus of the last trial's context.
    pub plaintext_modulus: u64,
}

impl TrialResults {
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            series: PhaseSeries::with_capacity(trials),
            decrypted: Vec::new(),
            slots: 0,
            plaintext_modulus: 0,
        }
    }
}

/// Runs `config.trials()` trials of scheme S. Any scheme error aborts the run.
pub fn run_trials<S: Scheme>(scheme: &SchemeConfig, config: &BenchConfig) -> Result<TrialResults> {
    let trials: usize = config.trials().get();
    let _span = info_span!("bench", scheme = S::NAME, trials).entered();

    let mut source: Source = Source::new(new_seed());
    let mut results: TrialResults = TrialResults::with_capacity(trials);

    for trial in 0..trials {
        let _span = info_span!("trial", trial).entered();
        run_trial::<S>(scheme, &mut results, &mut source)?;
    }

    info!(slots = results.slots, "done");
    Ok(results)
}

/// Appends one sample per phase to results.series and overwrites the
/// remaining fields of results with this trial's values.
fn run_trial<S: Scheme>(
    scheme: &SchemeConfig,
    results: &mut TrialResults,
    source: &mut Source,
) -> Result<()> {
    let series: &mut PhaseSeries = &mut results.series;
    let mut record = |phase: Phase, seconds: f64| {
        debug!(%phase, seconds, "phase");
        series.push(phase, seconds);
    };

    let (context, seconds) = measure(|| {
        Parameters::new(&scheme.parameters).and_then(|params| S::context(&params))
    });
    let context: S::Context = context?;
    record(Phase::ContextBuild, seconds);

    let (keys, seconds): (KeySet, f64) = measure(|| S::generate_keys(&context, source));
    record(Phase::KeyGeneration, seconds);

    let slots: usize = S::rlwe(&context).slots();
    let ones: Vec<u64> = vec![1; slots];
    let twos: Vec<u64> = vec![2; slots];

    let encrypt = |values: &[u64], source: &mut Source| -> schemes::Result<Ciphertext> {
        let pt: Plaintext = S::encode(&context, values)?;
        S::encrypt(&context, &keys.public, &pt, source)
    };

    let (cts, seconds) = measure(|| -> schemes::Result<(Ciphertext, Ciphertext)> {
        Ok((encrypt(&ones, source)?, encrypt(&twos, source)?))
    });
    let (ct1, ct2) = cts?;
    record(Phase::Encryption, seconds);

    let (ct_sum, seconds): (Ciphertext, f64) = measure(|| S::add(&context, &ct1, &ct2));
    record(Phase::Addition, seconds);

    let mul_lhs: Ciphertext = encrypt(&ones, source)?;
    let mul_rhs: Ciphertext = encrypt(&twos, source)?;
    let (ct_prod, seconds) = measure(|| {
        S::mul(&context, &mul_lhs, &mul_rhs)
            .and_then(|ct| S::relinearize(&context, &keys.relinearization, &ct))
    });
    let _ct_prod: Ciphertext = ct_prod?;
    record(Phase::Multiplication, seconds);

    let (pt, seconds) = measure(|| S::decrypt(&context, &keys.secret, &ct_sum));
    let pt: Plaintext = pt?;
    record(Phase::Decryption, seconds);

    results.decrypted = S::decode(&context, &pt);
    results.slots = slots;
    results.plaintext_modulus = S::rlwe(&context).plaintext_modulus();
    Ok(())
}
