mod command;
mod controller;
mod state;
