use pbd2d::{EngineConfig, PhysicsError, SimulationEngine, Vec2};
use wasm_bindgen::prelude::*;

// ---- Pendulum Builder Demo ----
//
// The host page draws circles and rods, handles drag/click input and the
// mass/speed dialog; everything physical goes through the engine here.

#[wasm_bindgen]
pub struct PendulumDemo {
    engine: SimulationEngine<f64>,
    pivot: Vec2<f64>,
}

#[wasm_bindgen]
impl PendulumDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(pivot_x: f64, pivot_y: f64) -> Result<PendulumDemo, JsError> {
        let config = EngineConfig::new()
            .with_gravity(Vec2::new(0.0, 300.0))
            .with_time_step(0.016)
            .with_solver_iterations(10);
        let engine = SimulationEngine::new(config).map_err(|e| JsError::new(&e.to_string()))?;
        let mut demo = PendulumDemo { engine, pivot: Vec2::new(pivot_x, pivot_y) };
        demo.reset();
        Ok(demo)
    }

    /// Clear the scene back to a lone fixed pivot.
    pub fn reset(&mut self) {
        self.engine.clear();
        self.engine.create_fixed_particle(self.pivot);
    }

    pub fn update(&mut self) {
        self.engine.step();
    }

    /// Hang a new bob at (x, y) from `anchor`. Positive `speed` pushes right.
    pub fn attach(
        &mut self,
        anchor: usize,
        x: f64,
        y: f64,
        mass: f64,
        speed: f64,
    ) -> Result<usize, JsError> {
        self.engine
            .attach_bob(anchor, Vec2::new(x, y), mass, Vec2::new(speed, 0.0))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Apply the dialog's mass and horizontal speed to an existing bob.
    pub fn edit(&mut self, index: usize, mass: f64, speed: f64) -> Result<(), JsError> {
        if !(mass > 0.0) {
            return Err(JsError::new(&PhysicsError::InvalidMass.to_string()));
        }
        self.engine
            .set_particle_mass(index, mass)
            .and_then(|_| self.engine.set_particle_velocity(index, Vec2::new(speed, 0.0)))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Remove a bob and its rods. The pivot at index 0 cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<(), JsError> {
        if index == 0 {
            return Err(JsError::new("the pivot cannot be removed"));
        }
        self.engine
            .remove_particle(index)
            .map(|_| ())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Index of the first particle within `radius` of (x, y), or -1 if none
    /// is in range or the index does not fit in an `i32`.
    pub fn pick(&self, x: f64, y: f64, radius: f64) -> i32 {
        let point = Vec2::new(x, y);
        self.engine
            .particles()
            .iter()
            .position(|p| p.position.distance(point) <= radius)
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.engine.particle_count() * 2);
        for p in self.engine.positions() {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Returns flat [a0, b0, a1, b1, ...] particle indices of every rod
    pub fn links(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.engine.constraint_count() * 2);
        for c in self.engine.constraints() {
            out.push(c.particle1() as u32);
            out.push(c.particle2() as u32);
        }
        out
    }

    /// Changes whenever bobs or rods are added or removed; the host re-reads
    /// `links` only when this moves.
    pub fn revision(&self) -> u64 {
        self.engine.revision()
    }

    pub fn particle_count(&self) -> usize {
        self.engine.particle_count()
    }

    pub fn time(&self) -> f64 {
        self.engine.time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_finds_pivot_or_reports_miss() {
        let demo = PendulumDemo::new(100.0, 50.0).unwrap();
        assert_eq!(demo.pick(102.0, 51.0, 5.0), 0);
        assert_eq!(demo.pick(400.0, 400.0, 5.0), -1);
    }
}
