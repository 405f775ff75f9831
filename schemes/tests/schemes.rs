use itertools::izip;
use schemes::{
    Bfv, Bgv, Ciphertext, KeySet, Parameters, ParametersLiteral, Plaintext, Scheme, SchemeError,
};
use sampling::Source;

fn sub_test<F: FnOnce()>(name: &str, f: F) {
    println!("Running {}", name);
    f();
}

fn parameters(log_n: usize, log_q: Vec<u32>, t: u64) -> Parameters {
    Parameters::new(&ParametersLiteral {
        log_n,
        q: vec![],
        log_q,
        t,
        xe: 3.2,
    })
    .unwrap()
}

#[test]
fn bgv() {
    let params: Parameters = parameters(4, vec![40, 40], 97);
    run_all::<Bgv>(&params);
    let params: Parameters = parameters(10, vec![50, 50, 50], 65537);
    run_all::<Bgv>(&params);
}

#[test]
fn bfv() {
    let params: Parameters = parameters(4, vec![40, 40], 97);
    run_all::<Bfv>(&params);
    let params: Parameters = parameters(10, vec![55, 55], 65537);
    run_all::<Bfv>(&params);
}

fn run_all<S: Scheme>(params: &Parameters) {
    let context: S::Context = S::context(params).unwrap();
    let mut source: Source = Source::new([0u8; 32]);
    let keys: KeySet = S::generate_keys(&context, &mut source);

    sub_test("test_add_constant_slots", || {
        test_add_constant_slots::<S>(&context, &keys, &mut source)
    });
    sub_test("test_mul_relinearize", || {
        test_mul_relinearize::<S>(&context, &keys, &mut source)
    });
    sub_test("test_decrypt_degree_two", || {
        test_decrypt_degree_two::<S>(&context, &keys, &mut source)
    });
    sub_test("test_degree_mismatch", || {
        test_degree_mismatch::<S>(&context, &keys, &mut source)
    });
}

fn encrypt<S: Scheme>(
    context: &S::Context,
    keys: &KeySet,
    values: &[u64],
    source: &mut Source,
) -> Ciphertext {
    let pt: Plaintext = S::encode(context, values).unwrap();
    S::encrypt(context, &keys.public, &pt, source).unwrap()
}

fn decrypt<S: Scheme>(context: &S::Context, keys: &KeySet, ct: &Ciphertext) -> Vec<u64> {
    let pt: Plaintext = S::decrypt(context, &keys.secret, ct).unwrap();
    S::decode(context, &pt)
}

fn test_add_constant_slots<S: Scheme>(context: &S::Context, keys: &KeySet, source: &mut Source) {
    let slots: usize = S::rlwe(context).slots();
    let ct1: Ciphertext = encrypt::<S>(context, keys, &vec![1u64; slots], source);
    let ct2: Ciphertext = encrypt::<S>(context, keys, &vec![2u64; slots], source);
    let ct3: Ciphertext = S::add(context, &ct1, &ct2);
    assert_eq!(decrypt::<S>(context, keys, &ct3), vec![3u64; slots]);
}

fn test_mul_relinearize<S: Scheme>(context: &S::Context, keys: &KeySet, source: &mut Source) {
    let rlwe = S::rlwe(context);
    let t: u64 = rlwe.plaintext_modulus();
    let slots: usize = rlwe.slots();

    let a: Vec<u64> = (0..slots as u64).map(|i| (i * 31 + 7) % t).collect();
    let b: Vec<u64> = (0..slots as u64).map(|i| (i * i + 3) % t).collect();
    let ct_a: Ciphertext = encrypt::<S>(context, keys, &a, source);
    let ct_b: Ciphertext = encrypt::<S>(context, keys, &b, source);

    let ct_ab: Ciphertext = S::mul(context, &ct_a, &ct_b).unwrap();
    assert_eq!(ct_ab.degree(), 2);
    let ct_ab: Ciphertext = S::relinearize(context, &keys.relinearization, &ct_ab).unwrap();
    assert_eq!(ct_ab.degree(), 1);

    let have: Vec<u64> = decrypt::<S>(context, keys, &ct_ab);
    izip!(have.iter(), a.iter(), b.iter())
        .for_each(|(have, a, b)| assert_eq!(*have, a * b % t));

    let ct_sum: Ciphertext = S::add(context, &ct_a, &ct_b);
    let have: Vec<u64> = decrypt::<S>(context, keys, &ct_sum);
    izip!(have.iter(), a.iter(), b.iter())
        .for_each(|(have, a, b)| assert_eq!(*have, (a + b) % t));
}

fn test_decrypt_degree_two<S: Scheme>(context: &S::Context, keys: &KeySet, source: &mut Source) {
    let slots: usize = S::rlwe(context).slots();
    let ct1: Ciphertext = encrypt::<S>(context, keys, &vec![1u64; slots], source);
    let ct2: Ciphertext = encrypt::<S>(context, keys, &vec![2u64; slots], source);
    let ct: Ciphertext = S::mul(context, &ct1, &ct2).unwrap();
    assert_eq!(decrypt::<S>(context, keys, &ct), vec![2u64; slots]);
}

fn test_degree_mismatch<S: Scheme>(context: &S::Context, keys: &KeySet, source: &mut Source) {
    let slots: usize = S::rlwe(context).slots();
    let ct: Ciphertext = encrypt::<S>(context, keys, &vec![1u64; slots], source);
    assert!(matches!(
        S::relinearize(context, &keys.relinearization, &ct),
        Err(SchemeError::DegreeMismatch {
            expected: 2,
            found: 1
        })
    ));
    let ct2: Ciphertext = S::mul(context, &ct, &ct).unwrap();
    assert!(matches!(
        S::mul(context, &ct2, &ct),
        Err(SchemeError::DegreeMismatch {
            expected: 1,
            found: 2
        })
    ));
}
