use super::{Backend, SolveReport};
use crate::StrError;
use russell_lab::{vec_copy, Vector};

/// Implements a backend whose damage reaches a fixed point after a given number of passes
///
/// At each load t, the damage target is `min(0.1 t, 1)` (but not below lb). The damage
/// moves linearly from lb to the target during the first `n_pass - 1` passes and remains
/// unchanged afterwards; thus, the alternate minimization stops at pass `n_pass`.
/// With `n_pass = 1`, the damage solve returns its input unchanged.
#[allow(dead_code)]
pub(crate) struct FixedPointDouble {
    pub ndof_u: usize,
    pub ndof_alpha: usize,
    pub n_pass: usize,
    pub initial: Option<Vector>,
    pub elasticity_report: SolveReport,
    pub damage_report: SolveReport,
    pub hard_failure_at: Option<f64>,
    pub t: f64,
    pub pass: usize,
    pub calls: Vec<&'static str>,
}

#[allow(dead_code)]
impl FixedPointDouble {
    pub fn new(ndof_u: usize, ndof_alpha: usize, n_pass: usize) -> Self {
        FixedPointDouble {
            ndof_u,
            ndof_alpha,
            n_pass,
            initial: None,
            elasticity_report: SolveReport::direct(),
            damage_report: SolveReport::direct(),
            hard_failure_at: None,
            t: 0.0,
            pass: 0,
            calls: Vec::new(),
        }
    }
}

impl Backend for FixedPointDouble {
    fn ndof_u(&self) -> usize {
        self.ndof_u
    }

    fn ndof_alpha(&self) -> usize {
        self.ndof_alpha
    }

    fn initial_damage(&self, alpha: &mut Vector) -> Result<(), StrError> {
        match &self.initial {
            Some(values) => vec_copy(alpha, values),
            None => Ok(()),
        }
    }

    fn update_load(&mut self, t: f64) -> Result<(), StrError> {
        if let Some(t_fail) = self.hard_failure_at {
            if t >= t_fail {
                return Err("backend failed to update the load");
            }
        }
        self.t = t;
        self.pass = 0;
        self.calls.push("load");
        Ok(())
    }

    fn solve_elasticity(&mut self, u: &mut Vector, _alpha: &Vector) -> Result<SolveReport, StrError> {
        self.calls.push("u");
        for i in 0..u.dim() {
            u[i] = self.t;
        }
        Ok(self.elasticity_report)
    }

    fn solve_damage(
        &mut self,
        alpha: &mut Vector,
        _u: &Vector,
        lb: &Vector,
        ub: &Vector,
    ) -> Result<SolveReport, StrError> {
        self.calls.push("alpha");
        self.pass += 1;
        if self.n_pass > 1 {
            let fraction = (usize::min(self.pass, self.n_pass - 1) as f64) / ((self.n_pass - 1) as f64);
            for i in 0..alpha.dim() {
                let target = f64::min(f64::max(0.1 * self.t, lb[i]), ub[i]);
                alpha[i] = lb[i] + (target - lb[i]) * fraction;
            }
        }
        Ok(self.damage_report)
    }

    fn elastic_energy(&self, _u: &Vector, alpha: &Vector) -> f64 {
        let mut energy = 0.0;
        for i in 0..alpha.dim() {
            energy += 0.5 * (1.0 - alpha[i]) * (1.0 - alpha[i]) * self.t * self.t;
        }
        energy
    }

    fn surface_energy(&self, alpha: &Vector) -> f64 {
        alpha.as_data().iter().sum()
    }

    fn reaction_force(&self, _u: &Vector, alpha: &Vector) -> f64 {
        let n = alpha.dim() as f64;
        let mean: f64 = alpha.as_data().iter().sum::<f64>() / n;
        self.t * (1.0 - mean)
    }
}

/// Implements a backend whose damage oscillates and never converges
#[allow(dead_code)]
pub(crate) struct Oscillating {
    pub ndof: usize,
    pub pass: usize,
}

#[allow(dead_code)]
impl Oscillating {
    pub fn new(ndof: usize) -> Self {
        Oscillating { ndof, pass: 0 }
    }
}

impl Backend for Oscillating {
    fn ndof_u(&self) -> usize {
        self.ndof
    }

    fn ndof_alpha(&self) -> usize {
        self.ndof
    }

    fn update_load(&mut self, _t: f64) -> Result<(), StrError> {
        Ok(())
    }

    fn solve_elasticity(&mut self, _u: &mut Vector, _alpha: &Vector) -> Result<SolveReport, StrError> {
        Ok(SolveReport::direct())
    }

    fn solve_damage(
        &mut self,
        alpha: &mut Vector,
        _u: &Vector,
        lb: &Vector,
        _ub: &Vector,
    ) -> Result<SolveReport, StrError> {
        self.pass += 1;
        let value = if self.pass % 2 == 0 { 0.5 } else { 0.6 };
        for i in 0..alpha.dim() {
            alpha[i] = f64::max(value, lb[i]);
        }
        Ok(SolveReport::direct())
    }

    fn elastic_energy(&self, _u: &Vector, _alpha: &Vector) -> f64 {
        0.0
    }

    fn surface_energy(&self, _alpha: &Vector) -> f64 {
        0.0
    }

    fn reaction_force(&self, _u: &Vector, _alpha: &Vector) -> f64 {
        0.0
    }
}
