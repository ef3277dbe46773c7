use rand::Rng;

/// `count` random 32-byte items.
pub fn random_items(count: usize) -> Vec<Vec<u8>> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let mut item = vec![0u8; 32];
            rng.fill(&mut item[..]);
            item
        })
        .collect()
}

/// Copy of `data` with one byte flipped at a random position.
pub fn mutate_byte_slice(data: &[u8]) -> Vec<u8> {
    let mut mutated = data.to_vec();
    if mutated.is_empty() {
        mutated.push(0xFF);
        return mutated;
    }
    let position = rand::thread_rng().gen_range(0..mutated.len());
    mutated[position] ^= 0xFF;
    mutated
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
