use egobox_acq::{select_by_ei, Surrogate};
use ndarray::{array, concatenate, Array1, Array2, ArrayView2, Axis};

fn xsinx(x: &ArrayView2<f64>) -> Array2<f64> {
    (x - 3.5) * ((x - 3.5) / std::f64::consts::PI).mapv(|v| v.sin())
}

/// A crude surrogate predicting the value of the nearest observation
/// with an uncertainty growing with the distance to it
struct NearestNeighbor {
    xt: Array2<f64>,
    yt: Array2<f64>,
}

impl Surrogate for NearestNeighbor {
    fn predict_valstd(&self, x: &ArrayView2<f64>) -> anyhow::Result<(Array2<f64>, Array1<f64>)> {
        anyhow::ensure!(self.xt.nrows() > 0, "no training data");
        let mut mean = Array2::zeros((x.nrows(), 1));
        let mut std = Array1::zeros(x.nrows());
        for (i, xi) in x.rows().into_iter().enumerate() {
            let (k, d) = self
                .xt
                .rows()
                .into_iter()
                .map(|xt| (&xt - &xi).mapv(|v| v * v).sum().sqrt())
                .enumerate()
                .fold((0, f64::INFINITY), |acc, (k, d)| if d < acc.1 { (k, d) } else { acc });
            mean[[i, 0]] = self.yt[[k, 0]];
            std[i] = 1e-3 + d;
        }
        Ok((mean, std))
    }

    fn y_max(&self) -> f64 {
        self.yt.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}

fn main() {
    let candidates = Array1::linspace(0., 25., 251).insert_axis(Axis(1));
    let xt = array![[0.], [7.], [25.]];
    let yt = xsinx(&xt.view());
    let mut model = NearestNeighbor { xt, yt };

    for _ in 0..10 {
        let res = select_by_ei(&model, &candidates.view(), 0.01, 1).expect("EI query");
        let y_new = xsinx(&res.instances.view());
        println!("query x = {} -> y = {}", res.instances, y_new);
        model.xt = concatenate![Axis(0), model.xt, res.instances];
        model.yt = concatenate![Axis(0), model.yt, y_new];
    }
    println!("Maximum xsinx(x) found = {}", model.y_max());
}
