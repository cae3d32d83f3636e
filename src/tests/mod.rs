pub mod util;

#[cfg(test)]
mod triangulate;
#[cfg(test)]
mod face;
