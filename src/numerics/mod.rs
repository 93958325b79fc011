//! Numerical methods: ODE stepping and quadrature
pub mod ode_solvers;
pub mod quadrature;
