use rand::Rng;

/// Approximate English letter frequencies, in percent. Used to fill random
/// boards with letters that actually form words now and then.
static LETTER_DISTRIBUTION: [(char, f32); 26] = [
    ('e', 12.70),
    ('t', 9.05),
    ('a', 8.16),
    ('o', 7.50),
    ('i', 6.96),
    ('n', 6.74),
    ('s', 6.32),
    ('h', 6.09),
    ('r', 5.98),
    ('d', 4.25),
    ('l', 4.02),
    ('c', 2.78),
    ('u', 2.75),
    ('m', 2.40),
    ('w', 2.36),
    ('f', 2.22),
    ('g', 2.01),
    ('y', 1.97),
    ('p', 1.92),
    ('b', 1.49),
    ('v', 0.97),
    ('k', 0.77),
    ('j', 0.15),
    ('x', 0.15),
    ('q', 0.09),
    ('z', 0.07),
];

fn cumulative_distribution() -> Vec<(char, f32)> {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|&(letter, freq)| {
            cumulative += freq;
            (letter, cumulative)
        })
        .collect()
}

/// Draws `count` letters weighted by frequency.
pub fn random_letters(count: usize) -> Vec<char> {
    let dist = cumulative_distribution();
    let total = dist.last().unwrap().1;
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| random_letter(&dist, total, &mut rng))
        .collect()
}

fn random_letter(dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
    let roll = rng.gen::<f32>() * total;
    for &(letter, cumulative) in dist {
        if roll <= cumulative {
            return letter;
        }
    }
    'e' // Fallback
}
