use std::str::FromStr;

use super::Kernel;
use crate::error::FilterError;

/// Create a box blur kernel.
///
/// Every weight equals `1 / order²`, so the filter output is the local mean
/// and the weights sum to one.
///
/// # Arguments
///
/// * `order` - The side length of the square kernel. Must be odd.
///
/// # Errors
///
/// Returns an error if `order` is even.
pub fn box_blur_kernel(order: usize) -> Result<Kernel, FilterError> {
    check_order(order)?;

    let num_weights = order * order;
    let mean = 1.0 / num_weights as f32;

    Kernel::new("boxBlur", order, vec![mean; num_weights])
}

/// Create an edge detection kernel.
///
/// A discrete Laplacian-like high-pass filter built from concentric rings:
/// the outermost ring holds `-1` and every ring inward accumulates a further
/// power-of-two subtraction, leaving a single positive center weight that
/// balances the total to zero.
///
/// # Arguments
///
/// * `order` - The side length of the square kernel. Must be odd.
///
/// # Errors
///
/// Returns an error if `order` is even.
pub fn edge_detection_kernel(order: usize) -> Result<Kernel, FilterError> {
    check_order(order)?;

    let mut weights = vec![-1.0f32; order * order];
    let mut core_weight = (order * order - 1) as f32;

    let core_point = order / 2;
    for k in 1..core_point {
        let difference = (1u32 << (k - 1)) as f32;
        for j in k..order - k {
            for i in k..order - k {
                weights[j * order + i] -= difference;
            }
        }
        let inner_order = (order - 2 * k) as f32;
        core_weight += difference * (inner_order * inner_order - 1.0);
    }
    weights[core_point * order + core_point] = core_weight;

    Kernel::new("edgeDetection", order, weights)
}

fn check_order(order: usize) -> Result<(), FilterError> {
    if order % 2 == 0 {
        return Err(FilterError::EvenKernelOrder(order));
    }
    Ok(())
}

/// The built-in kernel families.
///
/// A tagged selector for drivers that pick the filter at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelKind {
    /// Uniform averaging kernel.
    BoxBlur,
    /// Zero-sum high-pass kernel.
    EdgeDetection,
}

impl KernelKind {
    /// Build the kernel of this kind with the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` is even.
    pub fn create(&self, order: usize) -> Result<Kernel, FilterError> {
        match self {
            KernelKind::BoxBlur => box_blur_kernel(order),
            KernelKind::EdgeDetection => edge_detection_kernel(order),
        }
    }
}

impl FromStr for KernelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box-blur" | "boxBlur" => Ok(KernelKind::BoxBlur),
            "edge-detection" | "edgeDetection" => Ok(KernelKind::EdgeDetection),
            _ => Err(format!("unknown kernel kind: {s}")),
        }
    }
}

impl std::fmt::Display for KernelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            KernelKind::BoxBlur => write!(f, "box-blur"),
            KernelKind::EdgeDetection => write!(f, "edge-detection"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn box_blur_rejects_even_order() {
        for order in [0, 2, 4, 10] {
            let res = box_blur_kernel(order);
            assert!(matches!(res, Err(FilterError::EvenKernelOrder(_))));
        }
    }

    #[test]
    fn edge_detection_rejects_even_order() {
        for order in [0, 2, 4, 10] {
            let res = edge_detection_kernel(order);
            assert!(matches!(res, Err(FilterError::EvenKernelOrder(_))));
        }
    }

    #[test]
    fn box_blur_weights_are_normalized() -> Result<(), FilterError> {
        for order in [1, 3, 5, 7, 9] {
            let kernel = box_blur_kernel(order)?;
            assert_eq!(kernel.name(), "boxBlur");
            assert_eq!(kernel.weights().len(), order * order);

            let mean = 1.0 / (order * order) as f32;
            for &w in kernel.weights() {
                assert_eq!(w, mean);
            }

            let sum = kernel.weights().iter().sum::<f32>();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-5);
        }

        Ok(())
    }

    #[test]
    fn edge_detection_order_3() -> Result<(), FilterError> {
        let kernel = edge_detection_kernel(3)?;
        assert_eq!(kernel.name(), "edgeDetection");

        #[rustfmt::skip]
        assert_eq!(
            kernel.weights(),
            &[
                -1.0, -1.0, -1.0,
                -1.0,  8.0, -1.0,
                -1.0, -1.0, -1.0,
            ],
        );

        Ok(())
    }

    #[test]
    fn edge_detection_order_5() -> Result<(), FilterError> {
        let kernel = edge_detection_kernel(5)?;

        #[rustfmt::skip]
        assert_eq!(
            kernel.weights(),
            &[
                -1.0, -1.0, -1.0, -1.0, -1.0,
                -1.0, -2.0, -2.0, -2.0, -1.0,
                -1.0, -2.0, 32.0, -2.0, -1.0,
                -1.0, -2.0, -2.0, -2.0, -1.0,
                -1.0, -1.0, -1.0, -1.0, -1.0,
            ],
        );

        Ok(())
    }

    #[test]
    fn edge_detection_order_9_center_and_sum() -> Result<(), FilterError> {
        let kernel = edge_detection_kernel(9)?;
        assert_eq!(kernel.weights()[4 * 9 + 4], 208.0);

        let sum = kernel.weights().iter().sum::<f32>();
        assert_relative_eq!(sum, 0.0, epsilon = 1e-4);

        Ok(())
    }

    #[test]
    fn edge_detection_sums_to_zero() -> Result<(), FilterError> {
        for order in [1, 3, 5, 7, 9, 11, 13, 25] {
            let kernel = edge_detection_kernel(order)?;
            let sum = kernel.weights().iter().sum::<f32>();
            assert_relative_eq!(sum, 0.0, epsilon = 1e-3);
        }

        Ok(())
    }

    #[test]
    fn kernel_kind_dispatch() -> Result<(), FilterError> {
        assert_eq!(KernelKind::BoxBlur.create(3)?.name(), "boxBlur");
        assert_eq!(KernelKind::EdgeDetection.create(3)?.name(), "edgeDetection");
        Ok(())
    }

    #[test]
    fn kernel_kind_from_str() {
        assert_eq!("box-blur".parse(), Ok(KernelKind::BoxBlur));
        assert_eq!("edgeDetection".parse(), Ok(KernelKind::EdgeDetection));
        assert!("gaussian".parse::<KernelKind>().is_err());
    }
}
