use ndarray::Array2;

pub fn relu(x: &Array2<f64>) -> Array2<f64> {
    x.mapv(|v| if v > 0.0 { v } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn relu_zeroes_negatives_and_keeps_positives() {
        let x = arr2(&[[-1.5, 0.0, 2.5]]);
        assert_eq!(relu(&x), arr2(&[[0.0, 0.0, 2.5]]));
    }
}
