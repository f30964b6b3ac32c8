use crate::config::MockDataConfig;
use crate::models::UserPayload;
use crate::services::user_store::UserStore;

/// Popula o store com os usuários de exemplo, se habilitado.
/// Cria no máximo 5 usuários (o tamanho da lista fixa). Retorna quantos foram criados.
pub fn seed_initial_users(store: &UserStore, config: &MockDataConfig) -> usize {
    if !config.enable_initial_data {
        log::info!("👥 Mock users: initial data disabled, skipping seed");
        return 0;
    }

    let samples = build_initial_users();
    let to_create = config.initial_users_count.min(samples.len());

    for user in samples.into_iter().take(to_create) {
        store.create(user);
    }

    log::info!("👥 Mock users: seeded {} initial users", to_create);
    to_create
}

fn sample(first: &str, last: &str, phone: &str, address: &str, city: &str) -> UserPayload {
    UserPayload {
        first_name: first.into(),
        last_name: last.into(),
        email: format!("{}.{}@email.com", first.to_lowercase(), last.to_lowercase()),
        phone: phone.into(),
        address: address.into(),
        city: city.into(),
        country: "USA".into(),
    }
}

/// Constrói os 5 usuários de exemplo
fn build_initial_users() -> Vec<UserPayload> {
    vec![
        sample("John", "Doe", "+1-555-0123", "123 Main St", "New York"),
        sample("Jane", "Smith", "+1-555-0124", "456 Oak Ave", "Los Angeles"),
        sample("Bob", "Johnson", "+1-555-0125", "789 Pine Rd", "Chicago"),
        sample("Alice", "Brown", "+1-555-0126", "321 Elm St", "Houston"),
        sample("Charlie", "Davis", "+1-555-0127", "654 Maple Dr", "Phoenix"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seed_defaults_creates_five_users() {
        let store = UserStore::new();
        let created = seed_initial_users(&store, &MockDataConfig::default());

        assert_eq!(created, 5);
        let users = store.list();
        assert_eq!(users[0].email, "john.doe@email.com");
        assert_eq!(users[4].first_name, "Charlie");
        assert!(users.iter().all(|u| u.country == "USA"));
    }

    #[test]
    fn test_seed_is_capped_by_sample_list() {
        let store = UserStore::new();
        let config = MockDataConfig { enable_initial_data: true, initial_users_count: 50 };

        assert_eq!(seed_initial_users(&store, &config), 5);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_seed_respects_count_and_flag() {
        let store = UserStore::new();
        let config = MockDataConfig { enable_initial_data: true, initial_users_count: 2 };
        assert_eq!(seed_initial_users(&store, &config), 2);

        let disabled = UserStore::new();
        let config = MockDataConfig { enable_initial_data: false, initial_users_count: 5 };
        assert_eq!(seed_initial_users(&disabled, &config), 0);
        assert!(disabled.is_empty());
    }
}
