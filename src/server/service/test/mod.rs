mod leave;
