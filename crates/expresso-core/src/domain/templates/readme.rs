//! The generated project's `README.md`.
//!
//! The readme is the artifact most likely to drift: it restates the database
//! choice, the mapper, the setup commands, and the optional features in
//! prose. Everything configuration-dependent here is read from the config
//! or the capability registry, so it cannot disagree with the other
//! generators.

use crate::domain::{config::ProjectConfig, stack::Feature};

/// `README.md` content.
pub fn readme(config: &ProjectConfig) -> String {
    let database = config.database();

    let mut content = format!(
        "# {}\n\nBackend project generated by Expresso\n\n## 🚀 Quick Start\n\n### Prerequisites\n\n- Node.js (v14 or higher)\n- npm or yarn\n",
        config.name()
    );
    content.push_str(&format!("- {} installed and running\n", database.label()));

    content.push_str(
        r#"
### Installation

1. Install dependencies:
```bash
npm install
```

2. Create a `.env` file from `.env.example`:
```bash
cp .env.example .env
```

3. Update the `.env` file with your configuration

"#,
    );

    if database.is_relational() {
        content.push_str(
            r#"4. Run Prisma migrations:
```bash
npx prisma migrate dev
```

5. Generate Prisma Client:
```bash
npx prisma generate
```

"#,
        );
    }

    content.push_str(
        r#"### Running the Application

Development mode with auto-reload:
```bash
npm run dev
```

Production mode:
```bash
npm start
```

## 📦 Tech Stack

- **Framework:** Express.js
"#,
    );
    content.push_str(&format!("- **Database:** {}\n", database.label()));
    content.push_str(&format!("- **ORM:** {}\n", database.mapper_label()));
    content.push_str(
        r#"- **Authentication:** JWT (jsonwebtoken)
- **Security:** Helmet, CORS, Rate Limiting
"#,
    );

    if config.has(Feature::ApiDocs) {
        content.push_str("- **Documentation:** Swagger/OpenAPI\n");
    }
    if config.has(Feature::SchemaValidation) {
        content.push_str("- **Validation:** Zod\n");
    }
    if config.has(Feature::EmailTransport) {
        content.push_str("- **Email:** Nodemailer\n");
    }

    content.push_str(
        r#"
## 📁 Project Structure

```
src/
├── config/          # Configuration files (DB, Swagger, etc.)
├── controllers/     # Route controllers
├── middleware/      # Custom middleware
├── models/          # Database models
├── routes/          # API routes
├── services/        # Business logic
└── utils/           # Utility functions
```

## 🔑 Environment Variables

See `.env.example` for all required environment variables.

## 📚 API Documentation

"#,
    );

    if config.has(Feature::ApiDocs) {
        content.push_str("Swagger documentation is available at: `http://localhost:5000/api-docs`\n\n");
    } else {
        content.push_str("API documentation coming soon...\n\n");
    }

    content.push_str(
        r#"## 🛡️ Security Features

- Helmet for security headers
- CORS configuration
- Rate limiting
- JWT authentication
- Password hashing with bcrypt
- Cookie parser

## 📝 License

ISC

## 🤝 Contributing

Contributions are welcome! Please feel free to submit a Pull Request.
"#,
    );

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stack::Database;

    fn config(database: Database, docs: bool, validation: bool, email: bool) -> ProjectConfig {
        ProjectConfig::builder("demo-api")
            .database(database)
            .api_docs(docs)
            .schema_validation(validation)
            .email_transport(email)
            .build()
            .unwrap()
    }

    #[test]
    fn readme_states_the_generated_stack() {
        let content = readme(&config(Database::MongoDb, false, false, false));
        assert!(content.starts_with("# demo-api\n"));
        assert!(content.contains("- **Database:** MongoDB"));
        assert!(content.contains("- **ORM:** Mongoose"));
        assert!(content.contains("- MongoDB installed and running"));
    }

    #[test]
    fn relational_readme_documents_the_prisma_workflow() {
        let content = readme(&config(Database::PostgreSql, false, false, false));
        assert!(content.contains("- **ORM:** Prisma"));
        assert!(content.contains("npx prisma migrate dev"));
        assert!(content.contains("npx prisma generate"));

        let mongo = readme(&config(Database::MongoDb, false, false, false));
        assert!(!mongo.contains("prisma migrate"));
    }

    #[test]
    fn feature_lines_appear_iff_toggled() {
        let all = readme(&config(Database::MySql, true, true, true));
        assert!(all.contains("- **Documentation:** Swagger/OpenAPI"));
        assert!(all.contains("- **Validation:** Zod"));
        assert!(all.contains("- **Email:** Nodemailer"));

        let none = readme(&config(Database::MySql, false, false, false));
        assert!(!none.contains("Swagger"));
        assert!(!none.contains("Zod"));
        assert!(!none.contains("Nodemailer"));
    }

    #[test]
    fn docs_url_present_iff_docs_enabled() {
        let with = readme(&config(Database::MongoDb, true, false, false));
        assert!(with.contains("`http://localhost:5000/api-docs`"));

        let without = readme(&config(Database::MongoDb, false, false, false));
        assert!(without.contains("API documentation coming soon..."));
        assert!(!without.contains("/api-docs"));
    }

    #[test]
    fn no_mention_of_packages_the_resolver_does_not_install() {
        let content = readme(&config(Database::MongoDb, true, true, true));
        assert!(!content.contains("Multer"));
    }
}
