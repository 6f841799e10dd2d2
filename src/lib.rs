pub mod agent;
pub mod cli;
pub mod generator;
pub mod web;
