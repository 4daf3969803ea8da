/// Std trait impls shared by every sequence container, all expressed through the kernel.
///
/// `PartialEq` is generic over the right-hand side so an implementation can be compared
/// directly with any other one holding the same item type.
macro_rules! impl_sequence_traits {
    ($ty:ident) => {
        impl<T> Default for $ty<T> {
            fn default() -> Self {
                <Self as $crate::traits::SequenceKernel>::new()
            }
        }

        impl<T: std::fmt::Debug> std::fmt::Debug for $ty<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_list()
                    .entries($crate::traits::SequenceKernel::iter(self))
                    .finish()
            }
        }

        impl<T> FromIterator<T> for $ty<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                <Self as $crate::traits::SequenceKernel>::from_entries(iter)
            }
        }

        impl<T> Extend<T> for $ty<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for value in iter {
                    let end = $crate::traits::SequenceKernel::length(self);
                    $crate::traits::SequenceKernel::add(self, end, value);
                }
            }
        }

        impl<T, S> PartialEq<S> for $ty<T>
        where
            T: PartialEq,
            S: $crate::traits::SequenceKernel<Item = T>,
        {
            fn eq(&self, other: &S) -> bool {
                $crate::traits::entries_eq(self, other)
            }
        }

        impl<T: Eq> Eq for $ty<T> {}
    };
}
