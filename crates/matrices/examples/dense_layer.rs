use anyhow::Result;

use matrices::config::RandomConfig;
use matrices::{ops, Matrix};

/// Forward pass of one fully connected layer: `tanh(W x + b)`.
///
/// The input is a single-column matrix (one column, `inputs` rows) and the
/// weights have `inputs` columns and `outputs` rows.
fn forward(weights: &Matrix, bias: &Matrix, input: &Matrix) -> Result<Matrix> {
    let mut activation = ops::cross(weights, input)?;
    activation.add_matrix(bias)?;
    activation.map_in_place(f32::tanh);
    Ok(activation)
}

fn main() -> Result<()> {
    let (inputs, outputs) = (4, 3);
    let mut rng = RandomConfig::new(Some(42)).rng();

    let mut weights = Matrix::new(inputs, outputs)?;
    weights.randomize(&mut rng);
    let mut bias = Matrix::new(1, outputs)?;
    bias.randomize(&mut rng);

    let input = Matrix::from_vector(&[0.5, -1.0, 0.25, 2.0], false);
    let output = forward(&weights, &bias, &input)?;
    println!("activation ({}):\n{:.4}", output.shape(), output);

    // Gate the activation with a mask, entry by entry.
    let mask = Matrix::from_vector(&[1.0, 0.0, 1.0], false);
    let gated = ops::hadamard(&output, &mask)?;
    println!("gated:\n{:.4}", gated);

    Ok(())
}
