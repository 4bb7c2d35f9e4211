//! Static HTML pages served on `GET /register` and `GET /login`.

pub const REGISTER_FORM: &str = r#"<!DOCTYPE html>
<html>
    <body>
        <h1>Register User</h1>
        <form method="POST" action="/register">
            <label>Username:</label>
            <input type="text" name="username" required/>
            <br/><br/>
            <label>Password:</label>
            <input type="password" name="password" required/>
            <br/><br/>
            <button type="submit">Register</button>
        </form>
    </body>
</html>
"#;

pub const LOGIN_FORM: &str = r#"<!DOCTYPE html>
<html>
    <body>
        <h1>Login</h1>
        <form method="POST" action="/login">
            <label>Username:</label>
            <input type="text" name="username" required/>
            <br/><br/>
            <label>Password:</label>
            <input type="password" name="password" required/>
            <br/><br/>
            <button type="submit">Login</button>
        </form>
    </body>
</html>
"#;
