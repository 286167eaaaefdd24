mod objects;
mod one_of;
mod primitives;
mod writer;
