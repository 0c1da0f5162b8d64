// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Symbolic-algebra engine: parse strings into expression trees over a
//! real or complex scalar domain, then render, substitute, evaluate,
//! simplify and compute analytical derivatives of any order.
pub mod symbolic;
