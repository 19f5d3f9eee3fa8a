use argminmax::ArgMinMax;

/// A closed numeric range split into `n_chunks` equal-width chunks.
#[derive(serde::Deserialize, serde::Serialize, Default, Debug, Clone)]
pub struct RangeF64 {
    pub start_range: f64,
    pub end_range: f64,
    pub n_chunks: usize,
}

impl RangeF64 {
    pub fn new(start_range: f64, end_range: f64, n_chunks: usize) -> Self {
        debug_assert!(n_chunks > 0);
        Self {
            start_range,
            end_range,
            n_chunks,
        }
    }

    #[inline]
    pub fn n_chunks(&self) -> usize {
        self.n_chunks
    }

    pub fn range_length(&self) -> f64 {
        self.end_range - self.start_range
    }

    pub fn chunk_size(&self) -> f64 {
        self.range_length() / (self.n_chunks as f64)
    }

    pub fn chunk_index(&self, value: f64) -> usize {
        let index = (value - self.start_range) / self.chunk_size();
        // Negative indices saturate to 0 on the cast
        let chunk_index = index as usize;

        // Clamping handles floating-point inaccuracies at the upper boundary.
        chunk_index.min(self.n_chunks - 1)
    }

    pub fn chunk_bounds(&self, chunk_index: usize) -> (f64, f64) {
        debug_assert!(chunk_index < self.n_chunks);
        let lower_bound = self.start_range + chunk_index as f64 * self.chunk_size();
        let upper_bound = self.start_range + (chunk_index + 1) as f64 * self.chunk_size();
        (lower_bound, upper_bound)
    }
}

/// Callers guarantee a non-empty slice.
pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    (get_min(vec), get_max(vec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_index_clamps_upper_boundary() {
        let range = RangeF64::new(0.0, 10.0, 5);
        assert_eq!(range.chunk_index(0.0), 0);
        assert_eq!(range.chunk_index(3.9), 1);
        assert_eq!(range.chunk_index(10.0), 4);
        assert_eq!(range.chunk_bounds(4), (8.0, 10.0));
    }

    #[test]
    fn min_max_of_mixed_signs() {
        let values = [0.5, -0.25, 3.0, 1.0];
        assert_eq!(get_min_max(&values), (-0.25, 3.0));
        assert_eq!(get_min(&values), -0.25);
        assert_eq!(get_max(&values), 3.0);
    }
}
