/// Lengths are compared before any element is.
pub fn sequences_equal<A, B, T>(a: A, b: B) -> bool
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    A::IntoIter: ExactSizeIterator,
    B::IntoIter: ExactSizeIterator,
    T: PartialEq,
{
    let (a, b) = (a.into_iter(), b.into_iter());
    if a.len() != b.len() {
        return false;
    }

    a.zip(b).all(|(x, y)| x == y)
}
