use rand::Rng;

use crate::config::GenerationLimits;
use crate::models::{User, UserPayload};
use crate::services::user_store::UserStore;
use crate::utils::AppError;

pub const FIRST_NAMES: [&str; 10] = [
    "Alex", "Sam", "Jordan", "Taylor", "Casey", "Morgan", "Riley", "Avery", "Quinn", "Dakota",
];
pub const LAST_NAMES: [&str; 10] = [
    "Wilson", "Martinez", "Garcia", "Lopez", "Anderson", "Thomas", "Jackson", "White", "Harris",
    "Clark",
];
pub const CITIES: [&str; 10] = [
    "Seattle",
    "Denver",
    "Austin",
    "Portland",
    "Nashville",
    "Atlanta",
    "Boston",
    "Miami",
    "Detroit",
    "Minneapolis",
];
pub const COUNTRIES: [&str; 5] = ["USA", "Canada", "UK", "Australia", "Germany"];

const EMAIL_DOMAIN: &str = "example.com";

/// Gerador de usuários aleatórios com limites configurados
#[derive(Debug, Clone, Copy)]
pub struct UserGenerator {
    limits: GenerationLimits,
}

impl UserGenerator {
    pub fn new(limits: GenerationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> GenerationLimits {
        self.limits
    }

    /// count <= 0 usa o default configurado; acima do máximo é rejeitado
    pub fn resolve_count(&self, requested: i64) -> Result<usize, AppError> {
        let count = if requested <= 0 {
            i64::from(self.limits.default_count)
        } else {
            requested
        };

        if count > i64::from(self.limits.max_count) {
            return Err(AppError::InvalidRequest(format!(
                "Cannot generate more than {} users at once",
                self.limits.max_count
            )));
        }

        usize::try_from(count).map_err(|e| AppError::InvalidRequest(e.to_string()))
    }

    /// Gera e armazena usuários aleatórios
    pub fn generate(&self, store: &UserStore, requested: i64) -> Result<Vec<User>, AppError> {
        self.generate_with_rng(store, requested, &mut rand::rng())
    }

    pub fn generate_with_rng<R: Rng>(
        &self,
        store: &UserStore,
        requested: i64,
        rng: &mut R,
    ) -> Result<Vec<User>, AppError> {
        let count = self.resolve_count(requested)?;

        let users = (0..count)
            .map(|_| store.create(random_payload(&mut *rng)))
            .collect();

        Ok(users)
    }
}

fn pick<'a, R: Rng>(rng: &mut R, values: &[&'a str]) -> &'a str {
    values[rng.random_range(0..values.len())]
}

/// Monta um usuário plausível a partir dos vocabulários fixos
pub fn random_payload<R: Rng>(rng: &mut R) -> UserPayload {
    let first_name = pick(rng, &FIRST_NAMES);
    let last_name = pick(rng, &LAST_NAMES);
    let email = format!(
        "{}.{}@{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        EMAIL_DOMAIN
    );
    let phone = format!("+1-555-{:04}", rng.random_range(0..10_000u32));
    let street_number = rng.random_range(1..=999u32);
    let address = format!("{} {} St", street_number, pick(rng, &FIRST_NAMES));

    UserPayload {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email,
        phone,
        address,
        city: pick(rng, &CITIES).to_string(),
        country: pick(rng, &COUNTRIES).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn generator() -> UserGenerator {
        UserGenerator::new(GenerationLimits { default_count: 10, max_count: 100 })
    }

    #[test]
    fn test_resolve_count() {
        let generator = generator();

        assert_eq!(generator.resolve_count(0).unwrap(), 10);
        assert_eq!(generator.resolve_count(-3).unwrap(), 10);
        assert_eq!(generator.resolve_count(5).unwrap(), 5);
        assert_eq!(generator.resolve_count(100).unwrap(), 100);
        assert!(matches!(
            generator.resolve_count(101),
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_generate_zero_uses_default_count() {
        let store = UserStore::new();
        let users = generator().generate(&store, 0).unwrap();

        assert_eq!(users.len(), 10);
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_generate_above_max_is_rejected_without_side_effects() {
        let store = UserStore::new();
        let err = generator().generate(&store, 101).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid request: Cannot generate more than 100 users at once"
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_generate_five_creates_unique_listed_records() {
        let store = UserStore::new();
        let mut rng = StdRng::seed_from_u64(7);

        let users = generator().generate_with_rng(&store, 5, &mut rng).unwrap();

        assert_eq!(users.len(), 5);
        let ids: HashSet<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 5);

        let listed = store.list();
        for user in &users {
            assert!(listed.contains(user));
        }
    }

    #[test]
    fn test_generated_fields_follow_vocabularies() {
        let store = UserStore::new();
        let mut rng = StdRng::seed_from_u64(42);

        let users = generator().generate_with_rng(&store, 100, &mut rng).unwrap();

        for user in users {
            assert!(FIRST_NAMES.contains(&user.first_name.as_str()));
            assert!(LAST_NAMES.contains(&user.last_name.as_str()));
            assert!(CITIES.contains(&user.city.as_str()));
            assert!(COUNTRIES.contains(&user.country.as_str()));
            assert_eq!(
                user.email,
                format!(
                    "{}.{}@example.com",
                    user.first_name.to_lowercase(),
                    user.last_name.to_lowercase()
                )
            );

            let suffix = user.phone.strip_prefix("+1-555-").unwrap();
            assert_eq!(suffix.len(), 4);
            assert!(suffix.chars().all(|c| c.is_ascii_digit()));

            let (number, street) = user.address.split_once(' ').unwrap();
            let number: u32 = number.parse().unwrap();
            assert!((1..=999).contains(&number));
            assert!(street.ends_with(" St"));
        }
    }
}
