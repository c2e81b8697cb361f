use axum::Json;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

/// Serve the OpenAPI description of the API. Not wrapped in the response envelope.
pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

fn success(message: &str, data: Value) -> Value {
    json!({
        "description": message,
        "content": {
            "application/json": {
                "schema": {
                    "type": "object",
                    "properties": {
                        "success": { "type": "boolean", "example": true },
                        "message": { "type": "string", "example": message },
                        "data": data
                    }
                }
            }
        }
    })
}

fn error_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/responses/{}", name) })
}

fn error_response(code: u16, message: &str) -> Value {
    json!({
        "description": message,
        "content": {
            "application/json": {
                "schema": {
                    "type": "object",
                    "properties": {
                        "success": { "type": "boolean", "example": false },
                        "error": {
                            "type": "object",
                            "properties": {
                                "code": { "type": "integer", "example": code },
                                "message": { "type": "string", "example": message }
                            }
                        }
                    }
                }
            }
        }
    })
}

fn path_parameter(name: &str, description: &str) -> Value {
    json!({
        "in": "path",
        "name": name,
        "required": true,
        "description": description,
        "schema": { "type": "string" }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn list_operation(summary: &str, message: &str) -> Value {
    json!({
        "tags": ["Lists"],
        "summary": summary,
        "security": [{ "bearerAuth": [] }],
        "parameters": [
            path_parameter("email", "The email of the list owner."),
            path_parameter("movie_id", "The id of the movie.")
        ],
        "responses": {
            "200": success(message, schema_ref("UserResponse")),
            "401": error_ref("UnauthorizedError"),
            "403": error_ref("PermissionDenied"),
            "404": error_ref("NotFound"),
            "422": error_ref("ValidationError"),
            "500": error_ref("ApplicationError")
        }
    })
}

pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "myFlix API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Movie catalog with user accounts, favorites and watch lists."
        },
        "paths": paths(),
        "components": {
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }
            },
            "responses": {
                "UnauthorizedError": error_response(401, "Unauthorized."),
                "PermissionDenied": error_response(403, "Permission denied"),
                "NotFound": error_response(404, "Not Found."),
                "ValidationError": error_response(422, "Unprocessable Content."),
                "ApplicationError": error_response(500, "Something broke!")
            },
            "schemas": schemas()
        }
    })
}

fn paths() -> Map<String, Value> {
    let list_movies = read_operation(
        "Movie",
        "Retrieves all movies.",
        None,
        "Movies retrieved successfully",
        array_of("Movie"),
    );
    let get_movie = read_operation(
        "Movie",
        "Retrieves a movie by its exact title.",
        Some(("title", "The title of the movie.")),
        "Movie retrieved successfully",
        schema_ref("Movie"),
    );
    let get_genre = read_operation(
        "Genre",
        "Retrieves a genre by name.",
        Some(("name", "The name of the genre.")),
        "Genre retrieved successfully",
        schema_ref("Genre"),
    );
    let get_director = read_operation(
        "Director",
        "Retrieves a director by name.",
        Some(("name", "The name of the director.")),
        "Director details retrieved successfully",
        schema_ref("Director"),
    );
    let list_users = read_operation(
        "User",
        "Retrieves all users.",
        None,
        "Users retrieved successfully",
        array_of("UserResponse"),
    );
    let get_user = read_operation(
        "User",
        "Retrieves a user by email.",
        Some(("email", "The email of the user.")),
        "User retrieved successfully",
        schema_ref("UserResponse"),
    );

    let mut paths = Map::new();
    paths.insert("/login".to_string(), json!({ "post": login_operation() }));
    paths.insert("/movies".to_string(), json!({ "get": list_movies }));
    paths.insert("/movies/{title}".to_string(), json!({ "get": get_movie }));
    paths.insert("/genres/{name}".to_string(), json!({ "get": get_genre }));
    paths.insert("/directors/{name}".to_string(), json!({ "get": get_director }));
    paths.insert(
        "/users".to_string(),
        json!({ "get": list_users, "post": create_user_operation() }),
    );
    paths.insert(
        "/users/{email}".to_string(),
        json!({
            "get": get_user,
            "put": update_user_operation(),
            "delete": delete_user_operation()
        }),
    );
    paths.insert(
        "/lists/{email}/favorite/{movie_id}".to_string(),
        json!({
            "post": list_operation("Add a movie to the favorites.", "Movie added to favorites"),
            "delete": list_operation(
                "Remove a movie from the favorites.",
                "Movie removed from favorites"
            )
        }),
    );
    paths.insert(
        "/lists/{email}/watch/{movie_id}".to_string(),
        json!({
            "post": list_operation("Add a movie to the watch list.", "Movie added to watch list"),
            "delete": list_operation(
                "Remove a movie from the watch list.",
                "Movie removed from watch list"
            )
        }),
    );
    paths.insert(
        "/docs.json".to_string(),
        json!({
            "get": {
                "tags": ["Docs"],
                "summary": "This document.",
                "responses": { "200": { "description": "OpenAPI document." } }
            }
        }),
    );
    paths
}

fn array_of(name: &str) -> Value {
    json!({ "type": "array", "items": schema_ref(name) })
}

/// Bearer-gated GET with an optional path parameter.
fn read_operation(
    tag: &str,
    summary: &str,
    parameter: Option<(&str, &str)>,
    message: &str,
    data: Value,
) -> Value {
    let mut responses = Map::new();
    responses.insert("200".to_string(), success(message, data));
    responses.insert("401".to_string(), error_ref("UnauthorizedError"));
    if parameter.is_some() {
        responses.insert("404".to_string(), error_ref("NotFound"));
    }
    responses.insert("500".to_string(), error_ref("ApplicationError"));

    let parameters: Vec<Value> = parameter
        .map(|(name, description)| path_parameter(name, description))
        .into_iter()
        .collect();

    json!({
        "tags": [tag],
        "summary": summary,
        "security": [{ "bearerAuth": [] }],
        "parameters": parameters,
        "responses": responses
    })
}

fn json_body(schema: &str) -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": schema_ref(schema) } }
    })
}

fn login_operation() -> Value {
    let data = json!({
        "type": "object",
        "properties": {
            "user": schema_ref("Account"),
            "token": { "type": "string" },
            "expires_at": { "type": "string", "format": "date-time" }
        }
    });

    json!({
        "tags": ["Auth"],
        "summary": "Create an auth token.",
        "requestBody": json_body("LoginUserInput"),
        "responses": {
            "200": success("You are successfully logged in", data),
            "400": error_response(400, "Incorrect email or password."),
            "422": error_ref("ValidationError"),
            "500": error_ref("ApplicationError")
        }
    })
}

fn create_user_operation() -> Value {
    json!({
        "tags": ["User"],
        "summary": "Create a new user.",
        "requestBody": json_body("CreateUserInput"),
        "responses": {
            "201": success("User created successfully.", schema_ref("Account")),
            "409": error_response(409, "User already exists."),
            "422": error_ref("ValidationError"),
            "500": error_ref("ApplicationError")
        }
    })
}

fn update_user_operation() -> Value {
    json!({
        "tags": ["User"],
        "summary": "Update a user.",
        "security": [{ "bearerAuth": [] }],
        "parameters": [path_parameter("email", "The email of the user to update.")],
        "requestBody": json_body("UpdateUserInput"),
        "responses": {
            "200": success("User updated successfully.", schema_ref("Account")),
            "401": error_ref("UnauthorizedError"),
            "403": error_ref("PermissionDenied"),
            "404": error_ref("NotFound"),
            "422": error_ref("ValidationError"),
            "500": error_ref("ApplicationError")
        }
    })
}

fn delete_user_operation() -> Value {
    json!({
        "tags": ["User"],
        "summary": "Delete a user.",
        "security": [{ "bearerAuth": [] }],
        "parameters": [path_parameter("email", "The email of the user to delete.")],
        "responses": {
            "200": success("User was deleted", json!({ "type": "object" })),
            "401": error_ref("UnauthorizedError"),
            "403": error_ref("PermissionDenied"),
            "404": error_ref("NotFound"),
            "500": error_ref("ApplicationError")
        }
    })
}

fn object_schema(required: &[&str], properties: Value) -> Value {
    json!({ "type": "object", "required": required, "properties": properties })
}

fn schemas() -> Map<String, Value> {
    let date = json!({ "type": "string", "format": "date" });
    let nullable_date = json!({ "type": ["string", "null"], "format": "date" });
    let email = json!({ "type": "string", "format": "email" });
    let uuid = json!({ "type": "string", "format": "uuid" });

    let mut schemas = Map::new();
    schemas.insert(
        "LoginUserInput".to_string(),
        object_schema(
            &["email", "password"],
            json!({ "email": email, "password": { "type": "string" } }),
        ),
    );
    schemas.insert(
        "CreateUserInput".to_string(),
        object_schema(
            &["email", "name", "password"],
            json!({
                "email": email,
                "name": { "type": "string", "minLength": 5 },
                "password": { "type": "string", "minLength": 1 },
                "birthday": date
            }),
        ),
    );
    schemas.insert(
        "UpdateUserInput".to_string(),
        object_schema(
            &[],
            json!({
                "name": { "type": "string", "minLength": 5 },
                "password": { "type": "string", "minLength": 1 },
                "birthday": date
            }),
        ),
    );
    schemas.insert(
        "Account".to_string(),
        object_schema(
            &["email", "name"],
            json!({ "email": email, "name": { "type": "string" }, "birthday": nullable_date }),
        ),
    );
    schemas.insert(
        "UserResponse".to_string(),
        object_schema(
            &["email", "name", "favorite_movies", "to_watch"],
            json!({
                "email": email,
                "name": { "type": "string" },
                "birthday": nullable_date,
                "favorite_movies": array_of("MovieSummary"),
                "to_watch": array_of("MovieSummary")
            }),
        ),
    );
    schemas.insert(
        "MovieSummary".to_string(),
        object_schema(
            &["id", "title"],
            json!({
                "id": uuid,
                "title": { "type": "string" },
                "description": { "type": "string" },
                "image_path": { "type": "string" },
                "featured": { "type": "boolean" },
                "release_year": { "type": ["integer", "null"] },
                "mpa": { "type": "string" },
                "imdb": { "type": ["number", "null"] }
            }),
        ),
    );
    schemas.insert(
        "Movie".to_string(),
        object_schema(
            &["id", "title", "genre", "director", "actors"],
            json!({
                "id": uuid,
                "title": { "type": "string" },
                "description": { "type": "string" },
                "genre": schema_ref("Genre"),
                "director": schema_ref("Director"),
                "actors": array_of("Actor"),
                "image_path": { "type": "string" },
                "featured": { "type": "boolean" },
                "release_year": { "type": ["integer", "null"] },
                "mpa": { "type": "string" },
                "imdb": { "type": ["number", "null"] }
            }),
        ),
    );
    schemas.insert(
        "Genre".to_string(),
        object_schema(
            &["name"],
            json!({ "name": { "type": "string" }, "description": { "type": ["string", "null"] } }),
        ),
    );
    schemas.insert(
        "Director".to_string(),
        object_schema(
            &["name"],
            json!({
                "name": { "type": "string" },
                "bio": { "type": ["string", "null"] },
                "birth": nullable_date,
                "death": nullable_date
            }),
        ),
    );
    schemas.insert(
        "Actor".to_string(),
        object_schema(
            &["name"],
            json!({
                "name": { "type": "string" },
                "bio": { "type": "string" },
                "birthday": nullable_date,
                "image_path": { "type": "string" }
            }),
        ),
    );
    schemas
}
