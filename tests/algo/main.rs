// all algorithm test in this module
mod combination;
mod generate;
mod prim;
