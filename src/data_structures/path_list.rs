use std::rc::Rc;

/// An immutable singly-linked list whose tails are shared.
///
/// Prepending never copies: every branch built from the same list points at the
/// same tail. Used to grow many partial paths backwards from a common suffix.
#[derive(Debug)]
pub struct PathList<T> {
    head: T,
    tail: Option<Rc<PathList<T>>>,
    len: usize,
}

impl<T> PathList<T> {
    /// A one-element list
    pub fn of(value: T) -> Rc<Self> {
        Rc::new(PathList {
            head: value,
            tail: None,
            len: 1,
        })
    }

    /// A new list with `value` in front of `this`
    pub fn prepend(this: &Rc<Self>, value: T) -> Rc<Self> {
        Rc::new(PathList {
            head: value,
            tail: Some(Rc::clone(this)),
            len: this.len + 1,
        })
    }

    pub fn head(&self) -> &T {
        &self.head
    }

    pub fn tail(&self) -> Option<&Rc<PathList<T>>> {
        self.tail.as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true; a list always holds at least its head
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates from the head to the last element
    pub fn iter(&self) -> PathListIter<'_, T> {
        PathListIter { next: Some(self) }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.len);
        values.extend(self.iter().cloned());
        values
    }
}

/// Iterator over the elements of a [`PathList`]
pub struct PathListIter<'a, T> {
    next: Option<&'a PathList<T>>,
}

impl<'a, T> Iterator for PathListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.tail.as_deref();
        Some(&node.head)
    }
}
