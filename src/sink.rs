/// A resettable stream consumer.
///
/// Every sink starts out unseeded: the first [`add`](Sink::add) after construction or
/// [`reset`](Sink::reset) seeds it with that sample instead of combining it with old state.
pub trait Sink<T> {
    /// Drop back to the unseeded state. The next sample re-seeds the sink.
    fn reset(&mut self);

    /// Ingest one sample and return the sink-specific derived value.
    fn add(&mut self, input: T) -> T;

    /// Feed every sample of `inputs`, returning the value derived from the last one.
    fn add_all<I>(&mut self, inputs: I) -> Option<T>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        inputs.into_iter().fold(None, |_, input| Some(self.add(input)))
    }
}
