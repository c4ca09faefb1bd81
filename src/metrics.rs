use crate::program::{INSTRUCTION_COUNT, INSTRUCTIONS, LOOP_CLOSE, LOOP_OPEN};

/// How much structure there is in program output, measured as
/// brotli-compressed size (quality 2) over raw size.
///
/// A program that prints the same character over and over scores close to 0;
/// output with no repetition to exploit scores around 1 (slightly above for
/// very short inputs, where the brotli framing dominates). Empty output
/// scores 0.
pub fn high_order_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let params = brotli::enc::BrotliEncoderParams {
        quality: 2,
        ..Default::default()
    };
    let mut compressed = Vec::with_capacity(data.len());
    brotli::BrotliCompress(&mut &data[..], &mut compressed, &params)
        .expect("brotli compression into a Vec should not fail");

    compressed.len() as f64 / data.len() as f64
}

/// Count each significant instruction in `program`, indexed like
/// [`INSTRUCTIONS`].
pub fn instruction_histogram(program: &str) -> [usize; INSTRUCTION_COUNT] {
    let mut hist = [0usize; INSTRUCTION_COUNT];
    for c in program.chars() {
        if let Some(slot) = INSTRUCTIONS.iter().position(|&i| i == c) {
            hist[slot] += 1;
        }
    }
    hist
}

/// Deepest loop nesting in `program`. Stray `]` are ignored.
pub fn max_loop_depth(program: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0;
    for c in program.chars() {
        match c {
            LOOP_OPEN => {
                depth += 1;
                max = max.max(depth);
            }
            LOOP_CLOSE => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::interpreter::Interpreter;

    #[test]
    fn test_hoe_repetitive_output_scores_low() {
        let program = format!("{}{}", "+".repeat(88), ".".repeat(4096));
        let output = Interpreter::new().execute(&program).unwrap();
        let hoe = high_order_entropy(output.as_bytes());
        assert!(hoe < 0.1, "a run of 'X' should compress well, got {hoe}");
    }

    #[test]
    fn test_hoe_printable_noise_scores_high() {
        use rand::Rng;
        use rand::SeedableRng;
        // Uniform printable ASCII carries about 6.6 bits per byte.
        let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
        let noise: String = (0..8192)
            .map(|_| char::from(rng.gen_range(b' '..=b'~')))
            .collect();
        let hoe = high_order_entropy(noise.as_bytes());
        assert!(hoe > 0.7, "printable noise should barely compress, got {hoe}");
    }

    #[test]
    fn test_hoe_no_output() {
        let output = Interpreter::new().execute("+++").unwrap();
        assert_eq!(high_order_entropy(output.as_bytes()), 0.0);
    }

    #[test]
    fn test_instruction_histogram() {
        let hist = instruction_histogram("+++[>++<-]. ignored");
        // + - > < . [ ]
        assert_eq!(hist, [5, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_instruction_histogram_empty() {
        assert_eq!(instruction_histogram("").iter().sum::<usize>(), 0);
    }

    #[test]
    fn test_max_loop_depth() {
        assert_eq!(max_loop_depth(""), 0);
        assert_eq!(max_loop_depth("+++"), 0);
        assert_eq!(max_loop_depth("[][]"), 1);
        assert_eq!(max_loop_depth(">[+>[+-]<]"), 2);
        assert_eq!(max_loop_depth("]][["), 2);
    }
}
