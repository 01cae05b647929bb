//! Numerical integrators for Newtonian dynamics.
//!
//! Every integrator advances a `(position, velocity)` pair by one time step, given a function
//! that returns the acceleration for a position and velocity. The state type only needs to support
//! addition and scaling by an `f64`, so plain floats and small vector types work alike.

use std::ops::{Add, Div, Mul};

use derive_more::{Display, IsVariant};

mod tests;

/// State types the integrators can advance.
pub trait NewtonState:
    Copy + Add<Output = Self> + Mul<f64, Output = Self> + Div<f64, Output = Self>
{
}

impl<T> NewtonState for T where
    T: Copy + Add<Output = T> + Mul<f64, Output = T> + Div<f64, Output = T>
{
}

/// The integration scheme used to advance a state by one time step.
///
/// # Examples
/// ```
/// # use meadow::physics::NewtonIntegrator;
/// // Free fall, starting at rest.
/// let gravity = |_pos: f64, _vel: f64| -9.81;
/// let (pos, vel) = NewtonIntegrator::VelocityVerlet.integrate(0.0, 0.0, 0.5, gravity);
/// assert!((pos + 9.81 * 0.125).abs() < 1e-12);
/// assert!((vel + 9.81 * 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum NewtonIntegrator {
    /// Explicit (forward) Euler. First order and unstable for undamped oscillators.
    #[display("euler")]
    Euler,
    /// Updates the velocity first and moves with the new velocity. First order, but it conserves
    /// energy far better than [`Euler`](NewtonIntegrator::Euler).
    #[display("semi_implicit_euler")]
    SemiImplicitEuler,
    /// Second order. Assumes that the acceleration doesn't depend on the velocity: the second
    /// evaluation is made with the old velocity.
    #[display("velocity_verlet")]
    VelocityVerlet,
    /// The midpoint method.
    #[display("runge_kutta_2")]
    RungeKutta2,
    /// The classic fourth order Runge-Kutta method.
    #[display("runge_kutta_4")]
    RungeKutta4,
}

impl NewtonIntegrator {
    pub const ALL: [NewtonIntegrator; 5] = [
        NewtonIntegrator::Euler,
        NewtonIntegrator::SemiImplicitEuler,
        NewtonIntegrator::VelocityVerlet,
        NewtonIntegrator::RungeKutta2,
        NewtonIntegrator::RungeKutta4,
    ];

    /// Advances `(pos, vel)` by `dt` and returns the next position and velocity.
    /// `acceleration` is called with a position and a velocity, between one and four times
    /// depending on the integrator.
    pub fn integrate<T, F>(self, pos: T, vel: T, dt: f64, mut acceleration: F) -> (T, T)
    where
        T: NewtonState,
        F: FnMut(T, T) -> T,
    {
        match self {
            NewtonIntegrator::Euler => {
                let a = acceleration(pos, vel);
                (pos + vel * dt, vel + a * dt)
            }
            NewtonIntegrator::SemiImplicitEuler => {
                let a = acceleration(pos, vel);
                let next_vel = vel + a * dt;
                (pos + next_vel * dt, next_vel)
            }
            NewtonIntegrator::VelocityVerlet => {
                let a = acceleration(pos, vel);
                let next_pos = pos + vel * dt + a * dt * dt / 2.0;
                let next_a = acceleration(next_pos, vel);
                (next_pos, vel + (a + next_a) / 2.0 * dt)
            }
            NewtonIntegrator::RungeKutta2 => {
                let k1x = vel;
                let k1v = acceleration(pos, vel);
                let k2x = vel + k1v * dt / 2.0;
                let k2v = acceleration(pos + k1x * dt / 2.0, vel + k1v * dt / 2.0);
                (pos + k2x * dt, vel + k2v * dt)
            }
            NewtonIntegrator::RungeKutta4 => {
                let k1x = vel;
                let k1v = acceleration(pos, vel);
                let k2x = vel + k1v * dt / 2.0;
                let k2v = acceleration(pos + k1x * dt / 2.0, vel + k1v * dt / 2.0);
                let k3x = vel + k2v * dt / 2.0;
                let k3v = acceleration(pos + k2x * dt / 2.0, vel + k2v * dt / 2.0);
                let k4x = vel + k3v * dt;
                let k4v = acceleration(pos + k3x * dt, vel + k3v * dt);
                (
                    pos + (k1x + k2x * 2.0 + k3x * 2.0 + k4x) * dt / 6.0,
                    vel + (k1v + k2v * 2.0 + k3v * 2.0 + k4v) * dt / 6.0,
                )
            }
        }
    }
}
