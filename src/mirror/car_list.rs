use crate::db::Car;

/// Ordered car records with exact-match lookups.
///
/// Filters return `None` when nothing matches so callers can tell "no
/// matches" apart from a present result.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CarList {
    cars: Vec<Car>,
}

impl CarList {
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }

    /// Every car, in order.
    pub fn all(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// First car with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.id == id)
    }

    pub fn filter_by_year(&self, year: i64) -> Option<Vec<Car>> {
        self.filter(|c| c.year == year)
    }

    /// Case-sensitive.
    pub fn filter_by_make(&self, make: &str) -> Option<Vec<Car>> {
        self.filter(|c| c.make == make)
    }

    /// Case-sensitive.
    pub fn filter_by_model(&self, model: &str) -> Option<Vec<Car>> {
        self.filter(|c| c.model == model)
    }

    pub fn append(&mut self, car: Car) {
        self.cars.push(car);
    }

    /// Index of the first car with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.cars.iter().position(|c| c.id == id)
    }

    /// Remove the car at `index`, keeping the order of the rest.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Car {
        self.cars.remove(index)
    }

    /// Remove the first car with the given id, keeping the order of the rest.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Car> {
        let index = self.position(id)?;
        Some(self.remove_at(index))
    }

    fn filter<F>(&self, predicate: F) -> Option<Vec<Car>>
    where
        F: Fn(&Car) -> bool,
    {
        let matches: Vec<Car> = self.cars.iter().filter(|c| predicate(c)).cloned().collect();
        (!matches.is_empty()).then_some(matches)
    }
}
