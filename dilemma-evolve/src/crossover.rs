//! Crossover operators for the genetic algorithm
//!
//! Implements single-point crossover at bit granularity: a uniformly random
//! global bit position splits both genomes, the high-order prefix stays with
//! its owner and everything from the point onward is exchanged.

use dilemma_core::{Population, GENE_BITS};
use rand::Rng;

/// Cross adjacent pairs (0,1), (2,3), ... in place.
///
/// Each pair draws one value `rv` and crosses iff `rv <= crossover_rate`
/// (boundary inclusive, unlike mutation). The crossover point is drawn
/// fresh per crossing pair.
pub fn crossover<R: Rng>(pop: &mut Population, rng: &mut R) {
    for i in (0..pop.num_chromosomes).step_by(2) {
        let rv: f64 = rng.gen();
        if rv <= pop.crossover_rate {
            let (gene_pos, bit_pos) = select_bit(pop.num_genes, rng);

            let (left, right) = pop.chromosomes.split_at_mut(i + 1);
            cross_pair(&mut left[i].genes, &mut right[0].genes, gene_pos, bit_pos);
        }
    }
}

/// Draw a uniformly random crossover point over `num_genes * 8` bits,
/// decomposed into a gene byte index and a 1-indexed MSB-first bit
/// position within that byte.
pub fn select_bit<R: Rng>(num_genes: usize, rng: &mut R) -> (usize, usize) {
    let bit_index = rng.gen_range(0..num_genes * GENE_BITS);
    (bit_index / GENE_BITS, bit_index % GENE_BITS + 1)
}

/// Exchange everything from the crossover point onward between two genomes.
///
/// Within the byte at `gene_pos`, the `bit_pos - 1` high-order bits are kept
/// and the rest are exchanged; all later bytes are swapped whole. The keep
/// mask is computed in u16 because `bit_pos == 1` shifts by a full byte
/// width, which must truncate to an empty mask (whole-byte exchange).
pub fn cross_pair(a: &mut [u8], b: &mut [u8], gene_pos: usize, bit_pos: usize) {
    debug_assert!(a.len() == b.len());
    debug_assert!((1..=GENE_BITS).contains(&bit_pos));

    let keep_mask = ((0xFFu16 << (GENE_BITS - bit_pos + 1)) & 0xFF) as u8;
    let swap_mask = 0xFFu8 >> (bit_pos - 1);

    let gene_a = a[gene_pos];
    let gene_b = b[gene_pos];
    a[gene_pos] = (gene_a & keep_mask) | (gene_b & swap_mask);
    b[gene_pos] = (gene_b & keep_mask) | (gene_a & swap_mask);

    let (tail_a, tail_b) = (&mut a[gene_pos + 1..], &mut b[gene_pos + 1..]);
    tail_a.swap_with_slice(tail_b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dilemma_core::PopulationParams;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Explode a genome into individual bits, MSB-first
    fn to_bits(genes: &[u8]) -> Vec<u8> {
        genes
            .iter()
            .flat_map(|g| (0..GENE_BITS).map(move |b| (g >> (GENE_BITS - b - 1)) & 1))
            .collect()
    }

    #[test]
    fn test_cross_pair_full_byte_swap_at_bit_one() {
        let mut a = vec![0xAA, 0xBB];
        let mut b = vec![0x11, 0x22];
        cross_pair(&mut a, &mut b, 0, 1);

        assert_eq!(a, vec![0x11, 0x22]);
        assert_eq!(b, vec![0xAA, 0xBB]);
    }

    #[test]
    fn test_cross_pair_last_bit_only() {
        let mut a = vec![0b1111_1111];
        let mut b = vec![0b0000_0000];
        cross_pair(&mut a, &mut b, 0, 8);

        assert_eq!(a, vec![0b1111_1110]);
        assert_eq!(b, vec![0b0000_0001]);
    }

    #[test]
    fn test_cross_pair_mid_byte_and_suffix() {
        let mut a = vec![0b1100_1100, 0xFF];
        let mut b = vec![0b0011_0011, 0x00];
        // Point at bit 4 (1-indexed): keep 3 high bits, exchange the rest
        cross_pair(&mut a, &mut b, 0, 4);

        assert_eq!(a, vec![0b1101_0011, 0x00]);
        assert_eq!(b, vec![0b0010_1100, 0xFF]);
    }

    #[test]
    fn test_cross_pair_is_a_partition_exchange() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let orig_a: Vec<u8> = (0..4).map(|_| rng.gen()).collect();
            let orig_b: Vec<u8> = (0..4).map(|_| rng.gen()).collect();
            let (gene_pos, bit_pos) = select_bit(4, &mut rng);

            let mut a = orig_a.clone();
            let mut b = orig_b.clone();
            cross_pair(&mut a, &mut b, gene_pos, bit_pos);

            // Concatenating the kept prefix of one parent with the swapped
            // suffix of the other reconstructs each child exactly.
            let point = gene_pos * GENE_BITS + bit_pos - 1;
            let bits_a = to_bits(&orig_a);
            let bits_b = to_bits(&orig_b);

            let mut expect_a = bits_a[..point].to_vec();
            expect_a.extend_from_slice(&bits_b[point..]);
            let mut expect_b = bits_b[..point].to_vec();
            expect_b.extend_from_slice(&bits_a[point..]);

            assert_eq!(to_bits(&a), expect_a);
            assert_eq!(to_bits(&b), expect_b);
        }
    }

    #[test]
    fn test_select_bit_covers_whole_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let (gene_pos, bit_pos) = select_bit(3, &mut rng);
            assert!(gene_pos < 3);
            assert!((1..=8).contains(&bit_pos));
        }
    }

    #[test]
    fn test_boundary_draw_equal_to_rate_crosses() {
        let params = PopulationParams {
            num_genes: 1,
            num_chromosomes: 2,
            crossover_rate: 0.25,
            mutation_rate: 0.0,
        };
        let mut seed_rng = ChaCha8Rng::seed_from_u64(42);
        let mut pop = Population::random(params, &mut seed_rng).unwrap();
        pop.chromosomes[0].genes = vec![0xFF];
        pop.chromosomes[1].genes = vec![0x00];

        // StepRng(1 << 62, 0) yields exactly rv = 0.25; rv <= rate must cross.
        // The subsequent point draw lands at bit 3 of gene 0.
        let mut rng = StepRng::new(1 << 62, 0);
        crossover(&mut pop, &mut rng);

        assert_ne!(pop.chromosomes[0].genes, vec![0xFF]);
        assert_ne!(pop.chromosomes[1].genes, vec![0x00]);
    }

    #[test]
    fn test_draw_above_rate_leaves_pair_untouched() {
        let params = PopulationParams {
            num_genes: 1,
            num_chromosomes: 2,
            crossover_rate: 0.2,
            mutation_rate: 0.0,
        };
        let mut seed_rng = ChaCha8Rng::seed_from_u64(42);
        let mut pop = Population::random(params, &mut seed_rng).unwrap();
        let before: Vec<Vec<u8>> = pop.chromosomes.iter().map(|c| c.genes.clone()).collect();

        // rv = 0.25 > 0.2
        let mut rng = StepRng::new(1 << 62, 0);
        crossover(&mut pop, &mut rng);

        let after: Vec<Vec<u8>> = pop.chromosomes.iter().map(|c| c.genes.clone()).collect();
        assert_eq!(before, after);
    }
}
