mod cost;
mod scale;
