mod drone;
mod mission;
