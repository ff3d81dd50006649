use crate::base::{Config, DamageLaw, ParamLoading};
use crate::fem::CriticalPoint;
use crate::StrError;

/// Homogeneous solution of the traction test of a damaging bar
///
/// A bar of length L and cross-section H (per unit thickness) is stretched by an imposed
/// end displacement U. While the damage field is homogeneous, the strain is ε = U / L and
/// the damage minimizes the local energy density
///
/// ```text
/// f(α) = ½ (a(α) + k_ℓ) E ε² + Gc w(α) / (c_w ℓ)
/// ```
///
/// The damage starts when the force reaches
///
/// ```text
/// F_c = H √(Gc E w'(0) / (c_w ℓ))
/// ```
///
/// (F_c = 0 for AT2, which has no elastic phase).
pub struct HomogeneousBar {
    law: DamageLaw,
    young: f64,
    c: f64,
    k_ell: f64,
    length: f64,
    height: f64,
    ut: f64,
}

impl HomogeneousBar {
    /// Allocates a new instance
    ///
    /// **Note:** Only the traction loading has a homogeneous solution.
    pub fn new(config: &Config) -> Result<Self, StrError> {
        let ut = match config.loading {
            ParamLoading::Traction { ut } => ut,
            _ => return Err("the homogeneous solution requires the traction loading"),
        };
        if config.validate().is_some() {
            return Err("cannot compute the homogeneous solution because config.validate() failed");
        }
        let m = &config.material;
        Ok(HomogeneousBar {
            law: config.law,
            young: m.young,
            c: m.gc / (config.law.c_w() * m.ell),
            k_ell: m.k_ell,
            length: config.geometry.length,
            height: config.geometry.height,
            ut,
        })
    }

    /// Returns the critical force F_c
    pub fn critical_force(&self) -> f64 {
        self.height * f64::sqrt(self.c * self.young * self.law.dw(0.0)) * (1.0 + self.k_ell)
    }

    /// Returns the critical end displacement U_c = F_c L / ((1 + k_ℓ) E H)
    pub fn critical_displacement(&self) -> f64 {
        self.critical_force() * self.length / ((1.0 + self.k_ell) * self.young * self.height)
    }

    /// Returns the critical point in terms of the load multiplier t = U / ut
    ///
    /// Returns None if ut is zero.
    pub fn critical_point(&self) -> Option<CriticalPoint> {
        if self.ut == 0.0 {
            return None;
        }
        Some(CriticalPoint {
            load: self.critical_displacement() / self.ut,
            force: self.critical_force(),
        })
    }

    /// Returns the homogeneous damage for the end displacement U (starting from an undamaged bar)
    pub fn damage(&self, displacement: f64) -> f64 {
        let eps = displacement / self.length;
        self.law.local_minimizer(self.young * eps * eps, self.c, 0.0, 1.0)
    }

    /// Returns the force for the end displacement U (homogeneous damage)
    pub fn force(&self, displacement: f64) -> f64 {
        let alpha = self.damage(displacement);
        let eps = displacement / self.length;
        (self.law.a(alpha) + self.k_ell) * self.young * eps * self.height
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::HomogeneousBar;
    use crate::base::{Config, DamageLaw, ParamLoading};
    use russell_lab::approx_eq;

    #[test]
    fn new_captures_errors() {
        let mut config = Config::new();
        config.set_loading(ParamLoading::ThermalShock { delta_t: 10.0 });
        assert_eq!(
            HomogeneousBar::new(&config).err(),
            Some("the homogeneous solution requires the traction loading")
        );
        config.set_loading(ParamLoading::Traction { ut: 1.0 }).set_tol(0.0);
        assert_eq!(
            HomogeneousBar::new(&config).err(),
            Some("cannot compute the homogeneous solution because config.validate() failed")
        );
    }

    #[test]
    fn critical_values_work() {
        let mut config = Config::new();
        config.material.k_ell = 0.0;
        let bar = HomogeneousBar::new(&config).unwrap();
        // F_c = H √(Gc E / (c_w ℓ)) with c_w = 4√2/3
        let c_w = 4.0 * f64::sqrt(2.0) / 3.0;
        let fc = f64::sqrt(1.0 * 10.0 / (c_w * 0.1));
        approx_eq(bar.critical_force(), fc, 1e-14);
        approx_eq(bar.critical_displacement(), fc * 5.0 / 10.0, 1e-14);
        let cp = bar.critical_point().unwrap();
        approx_eq(cp.load, fc * 5.0 / 10.0 / 1.3, 1e-14);
        approx_eq(cp.force, fc, 1e-14);

        config.set_loading(ParamLoading::Traction { ut: 0.0 });
        let bar = HomogeneousBar::new(&config).unwrap();
        assert_eq!(bar.critical_point(), None);

        config.set_law(DamageLaw::AT2);
        let bar = HomogeneousBar::new(&config).unwrap();
        assert_eq!(bar.critical_force(), 0.0);
    }

    #[test]
    fn damage_and_force_work() {
        let mut config = Config::new();
        config.material.k_ell = 0.0;
        let bar = HomogeneousBar::new(&config).unwrap();
        let uc = bar.critical_displacement();

        // elastic phase
        assert_eq!(bar.damage(0.5 * uc), 0.0);
        approx_eq(bar.force(0.5 * uc), 0.5 * bar.critical_force(), 1e-14);

        // softening: F = (1 - α)² E ε H with α = 1 - (U_c / U)²
        let u = 2.0 * uc;
        approx_eq(bar.damage(u), 0.75, 1e-14);
        approx_eq(bar.force(u), 0.0625 * 10.0 * (u / 5.0), 1e-14);
        assert!(bar.force(u) < bar.critical_force());
    }
}
