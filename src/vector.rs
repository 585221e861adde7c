use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::{ToPrimitive, Zero};

/// A point or direction in 3D space over a numeric component type
///
/// Components are stored contiguously and addressed by index, with
/// 0, 1, 2 mapping to X, Y, Z. Indexing outside that range panics with
/// the standard slice bounds message, staying in range is on the caller.
/// All arithmetic is pure and returns a new vector, operands are never
/// modified.
#[derive(Debug,Clone,Copy,PartialEq,Default)]
pub struct Vector3<T>([T; 3]);

pub type Double3 = Vector3<f64>;

impl<T> Vector3<T>
{
    pub fn new(x: T, y: T, z: T) -> Self
    {
        Vector3([x, y, z])
    }
}

impl<T: Zero + Copy> Vector3<T>
{
    pub fn zero() -> Self
    {
        Vector3([T::zero(); 3])
    }
}

impl<T: Copy> Vector3<T>
{
    pub fn x(&self) -> T { self.0[0] }
    pub fn y(&self) -> T { self.0[1] }
    pub fn z(&self) -> T { self.0[2] }
}

impl<T: Add<Output = T> + Mul<Output = T> + Copy> Vector3<T>
{
    /// Sum of the pairwise component products
    pub fn dot(&self, other: &Self) -> T
    {
        self.0[0] * other.0[0] + self.0[1] * other.0[1] + self.0[2] * other.0[2]
    }
}

impl<T: Add<Output = T> + Mul<Output = T> + ToPrimitive + Copy> Vector3<T>
{
    /// Euclidean length, an f64 even when the components are integers
    pub fn magnitude(&self) -> f64
    {
        // to_f64 on a primitive numeric type never fails
        self.dot(self).to_f64().unwrap().sqrt()
    }
}

impl<T> Index<usize> for Vector3<T>
{
    type Output = T;

    fn index(&self, index: usize) -> &T
    {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Vector3<T>
{
    fn index_mut(&mut self, index: usize) -> &mut T
    {
        &mut self.0[index]
    }
}

impl<T: Add<Output = T> + Copy> Add for Vector3<T>
{
    type Output = Vector3<T>;

    fn add(self, other: Self) -> Self::Output
    {
        Vector3([self.0[0] + other.0[0], self.0[1] + other.0[1], self.0[2] + other.0[2]])
    }
}

impl<T: Sub<Output = T> + Copy> Sub for Vector3<T>
{
    type Output = Vector3<T>;

    fn sub(self, other: Self) -> Self::Output
    {
        Vector3([self.0[0] - other.0[0], self.0[1] - other.0[1], self.0[2] - other.0[2]])
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T>
{
    // components separated by single spaces, no brackets
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}
