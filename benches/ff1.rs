extern crate bencher;

fn encrypt(b: &mut bencher::Bencher) {
    let key = [0u8; 16];
    let pt: Vec<u16> = "0123456789"
        .chars()
        .map(|c| c.to_digit(10).unwrap() as u16)
        .collect();
    b.iter(|| ff1fpe::encrypt(&key, &[], 10, &pt));
}

fn decrypt(b: &mut bencher::Bencher) {
    let key = [0u8; 16];
    let pt: Vec<u16> = "0123456789"
        .chars()
        .map(|c| c.to_digit(10).unwrap() as u16)
        .collect();
    let ct = ff1fpe::encrypt(&key, &[], 10, &pt).unwrap();
    b.iter(|| ff1fpe::decrypt(&key, &[], 10, &ct));
}

fn context(b: &mut bencher::Bencher) {
    let key = [0u8; 16];
    b.iter(|| ff1fpe::FF1::new(&key, None, 26, None).unwrap());
}

bencher::benchmark_group!(benches, context, encrypt, decrypt);
bencher::benchmark_main!(benches);
